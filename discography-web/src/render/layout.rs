//! Page shell: document head, header, not-found page

/// Document title shown in the browser tab
pub const SITE_TITLE: &str = "DISCOGRAPHY";

/// Name in the header link back to the collection
pub const APP_NAME: &str = "Album Explorer";

const SITE_DESCRIPTION: &str = "Explore albums and their tracks from a hosted catalog database.";

const STYLES: &str = r#"
        :root {
            --bg: #0f1115;
            --card: #181b22;
            --border: #2a2e38;
            --fg: #e8e9ed;
            --muted: #8b90a0;
            --primary: #8b7cf6;
        }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            font-family: "DM Sans", system-ui, -apple-system, sans-serif;
            background: var(--bg);
            color: var(--fg);
            line-height: 1.5;
        }
        a { color: inherit; text-decoration: none; }
        .site-header {
            position: sticky;
            top: 0;
            z-index: 50;
            border-bottom: 1px solid var(--border);
            background: rgba(15, 17, 21, 0.95);
        }
        .site-header .brand {
            display: flex;
            align-items: center;
            height: 56px;
            max-width: 1400px;
            margin: 0 auto;
            padding: 0 16px;
            font-family: "Space Grotesk", system-ui, sans-serif;
            font-size: 1.5rem;
            font-weight: 700;
        }
        main { max-width: 1400px; margin: 0 auto; padding: 32px 16px; }
        h1 { font-family: "Space Grotesk", system-ui, sans-serif; color: var(--primary); }
        .muted { color: var(--muted); }
        .intro { text-align: center; margin-bottom: 48px; }
        .intro h1 { font-size: 3rem; margin: 0; }
        .search { max-width: 28rem; margin: 0 auto 32px; }
        .search input {
            width: 100%;
            height: 48px;
            padding: 0 12px;
            border-radius: 6px;
            border: 1px solid var(--border);
            background: var(--card);
            color: var(--fg);
            font-size: 1rem;
        }
        .album-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 24px;
        }
        .album-card {
            display: flex;
            flex-direction: column;
            border: 1px solid var(--border);
            border-radius: 8px;
            overflow: hidden;
            background: var(--card);
        }
        .album-card:hover { border-color: var(--primary); }
        .album-card img { width: 100%; height: auto; aspect-ratio: 1; object-fit: cover; }
        .album-card h2 { font-size: 1.1rem; margin: 0; padding: 16px; }
        .empty-state { text-align: center; padding: 64px 0; }
        .alert {
            max-width: 42rem;
            margin: 64px auto 0;
            padding: 16px 20px;
            border: 1px solid var(--border);
            border-radius: 8px;
        }
        .alert pre { background: rgba(139, 144, 160, 0.1); padding: 8px; border-radius: 6px; overflow-x: auto; }
        .detail { display: grid; grid-template-columns: 1fr 2fr; gap: 32px; align-items: start; }
        .detail img { width: 100%; height: auto; }
        .stats { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; padding: 16px; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 10px 12px; border-bottom: 1px solid var(--border); text-align: left; }
        td.num, th.num { text-align: center; width: 50px; }
        td.duration, th.duration { text-align: right; }
        @media (max-width: 768px) {
            .detail { grid-template-columns: 1fr; }
            .composer { display: none; }
        }
"#;

/// Wrap `body` in the document shell and site header
pub fn render_page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="dark">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{description}">
    <title>{title}</title>
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@700&family=DM+Sans:wght@400;500;700&display=swap" rel="stylesheet">
    <style>{styles}</style>
</head>
<body>
{header}
<main>
{body}
</main>
</body>
</html>
"#,
        description = SITE_DESCRIPTION,
        title = SITE_TITLE,
        styles = STYLES,
        header = render_header(),
        body = body,
    )
}

fn render_header() -> String {
    format!(
        r#"<header class="site-header">
    <a class="brand" href="/">&#9835;&nbsp;{}</a>
</header>"#,
        APP_NAME
    )
}

/// Standard not-found page body, served with status 404
pub fn render_not_found_page() -> String {
    render_page(
        r#"<div class="empty-state">
    <h1>404</h1>
    <p class="muted">This page could not be found.</p>
    <p><a href="/">&larr; Back to Albums</a></p>
</div>"#,
    )
}
