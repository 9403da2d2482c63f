//! Editor page template.

use mdview_renderer::escape_html;

use crate::view::ViewState;

/// Markdown shown in the editor on first load.
pub(crate) const PLACEHOLDER: &str = r#"# Welcome to my Markdown Previewer!

## This is a sub-heading...
### And here's some other cool stuff:

Heres some code, `<div></div>`, between 2 backticks.

```
// this is multi-line code:

function anotherExample(firstLine, lastLine) {
  if (firstLine == '```' && lastLine == '```') {
    return multiLineCode;
  }
}
```

You can also make text **bold**... whoa!
Or _italic_.
Or... wait for it... **_both!_**
And feel free to go crazy ~~crossing stuff out~~.

There's also [links](https://www.freecodecamp.org), and
> Block Quotes!

And if you want to get really crazy, even tables:

Wild Header | Crazy Header | Another Header?
------------ | ------------- | -------------
Your content can | be here, and it | can be here....
And here. | Okay. | I think we get it.

- And of course there are lists.
  - Some are bulleted.
     - With different indentation levels.
        - That look like this.


1. And there are numbered lists too.
1. Use just 1s if you want!
1. And last but not least, let's not forget embedded images:

![freeCodeCamp Logo](https://cdn.freecodecamp.org/testable-projects-fcc/images/fcc_secondary.svg)
"#;

const ICON_BRAND: &str = r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><rect x="1.5" y="4.5" width="21" height="15" rx="2" fill="none" stroke="currentColor" stroke-width="2"/><path d="M5 16V8l3 4 3-4v8M16 8v7m-2.5-2.5L16 15l2.5-2.5" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

const ICON_MAXIMIZE: &str = r#"<svg class="icon icon-maximize" viewBox="0 0 24 24" aria-hidden="true"><path d="M4 9V4h5M15 4h5v5M20 15v5h-5M9 20H4v-5" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

const ICON_MINIMIZE: &str = r#"<svg class="icon icon-minimize" viewBox="0 0 24 24" aria-hidden="true"><path d="M9 4v5H4M20 9h-5V4M15 20v-5h5M4 15h5v5" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;

/// Header of one pane with its title and maximize toggle.
fn pane_header(title: &str, pane: &str, toggled: ViewState) -> String {
    format!(
        r#"<header class="pane-header">{ICON_BRAND}<span class="pane-title">{title}</span><a class="pane-toggle" data-pane="{pane}" href="{href}" title="Toggle {pane}">{ICON_MAXIMIZE}{ICON_MINIMIZE}</a></header>"#,
        href = toggled.href(),
    )
}

/// Render the full page.
///
/// `markdown` is escaped into the editor. `preview_html` must already be
/// sanitized and is inserted as markup.
pub(crate) fn render_page(view: ViewState, markdown: &str, preview_html: &str) -> String {
    let editor_header = pane_header("Editor", "editor", view.toggle_editor());
    let previewer_header = pane_header("Previewer", "previewer", view.toggle_previewer());
    let markdown = escape_html(markdown);
    let body_class = view.body_class();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Markdown Previewer</title>
<link rel="stylesheet" href="/assets/style.css">
</head>
<body class="{body_class}">
<main class="panes">
<section class="pane editor-pane">
{editor_header}
<textarea id="mdview_editor" spellcheck="false">{markdown}</textarea>
</section>
<section class="pane previewer-pane">
{previewer_header}
<div id="mdview_preview">{preview_html}</div>
</section>
</main>
<script src="/assets/app.js"></script>
</body>
</html>
"#
    )
}
