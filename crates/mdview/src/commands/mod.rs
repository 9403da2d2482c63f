//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod serve;

pub(crate) use render::RenderArgs;
pub(crate) use serve::ServeArgs;

use mdview_config::Config;
use mdview_pipeline::{HighlightOptions, PipelineConfig, SanitizeOptions};

/// Build the pipeline configuration from loaded settings.
pub(crate) fn pipeline_config(config: &Config) -> PipelineConfig {
    let highlight = config.render.highlight.then(|| HighlightOptions {
        line_numbers: config.render.line_numbers,
        languages: config.render.languages.clone(),
    });

    PipelineConfig {
        gfm: config.render.gfm,
        highlight,
        sanitize: SanitizeOptions {
            allow_data_images: config.sanitize.allow_data_images,
        },
    }
}
