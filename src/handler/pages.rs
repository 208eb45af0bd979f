//! Site page handlers
//!
//! Renders the five pages of the site and accepts contact form
//! submissions. Internal links and the form action are produced by reverse
//! lookup on the route table so they stay consistent with the routing
//! rules.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, form};
use crate::logger;
use crate::routing::{Page, RouteTable};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Request, Response};
use std::sync::Arc;
use tokio::fs;

const FAVICON_PATH: &str = "static/favicon.svg";

/// Serve a rendered page with conditional-request support
pub fn serve_page(
    page: Page,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let html = render(page, &state.routes);
    let etag = cache::generate_etag(html.as_bytes());

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_page_response(html, &etag, ctx.is_head, &state.config.http)
}

/// Serve favicon
pub async fn serve_favicon(ctx: &RequestContext) -> Response<Full<Bytes>> {
    match fs::read(FAVICON_PATH).await {
        Ok(data) => {
            let etag = cache::generate_etag(&data);
            if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
                return http::build_304_response(&etag);
            }
            http::build_favicon_response(&data, &etag, ctx.is_head)
        }
        Err(_) => http::build_404_response(),
    }
}

/// Accept a contact form submission and redirect to the confirmation page
///
/// Messages are logged, not persisted; the redirect target comes from
/// reverse lookup so it follows the route table.
pub async fn submit_contact(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_error(&format!("Failed to read contact form body: {e}"));
            return http::build_400_response("unreadable form body");
        }
    };

    let fields = form::parse(&String::from_utf8_lossy(&body));
    let name = form::first(&fields, "name").unwrap_or("anonymous");
    let email = form::first(&fields, "email").unwrap_or("-");
    logger::log_contact_message(name, email);

    let target = state
        .routes
        .path_for("success")
        .unwrap_or_else(|| "/".to_string());
    http::build_redirect_response_with_code(&target, 303)
}

/// Render a full HTML document for a page
pub fn render(page: Page, routes: &RouteTable) -> String {
    match page {
        Page::Index => layout("MUNIA", &index_body(routes), routes),
        Page::Contact => layout("Contact", &contact_body(routes), routes),
        Page::Devices => layout("Devices", DEVICES_BODY, routes),
        Page::Faq => layout("FAQ", FAQ_BODY, routes),
        Page::Success => layout("Message sent", &success_body(routes), routes),
    }
}

fn href(routes: &RouteTable, name: &str) -> String {
    routes.path_for(name).unwrap_or_else(|| "/".to_string())
}

fn nav(routes: &RouteTable) -> String {
    [
        ("index", "Home"),
        ("devices", "Devices"),
        ("faq", "FAQ"),
        ("contact", "Contact"),
    ]
    .iter()
    .map(|(name, label)| format!(r#"<a href="{}">{label}</a>"#, href(routes, name)))
    .collect::<Vec<_>>()
    .join("\n            ")
}

fn layout(title: &str, body: &str, routes: &RouteTable) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - MUNIA</title>
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: #1b1e28;
            color: #e6e6e6;
        }}
        header {{
            background: #12141c;
            padding: 20px 40px;
            display: flex;
            align-items: baseline;
            gap: 40px;
        }}
        header h1 {{
            font-size: 1.5em;
            color: #4ade80;
        }}
        nav a {{
            color: #e6e6e6;
            text-decoration: none;
            margin-right: 20px;
            font-weight: 600;
        }}
        nav a:hover {{
            color: #4ade80;
        }}
        main {{
            max-width: 820px;
            margin: 0 auto;
            padding: 40px 20px;
        }}
        main h2 {{
            color: #4ade80;
            margin-bottom: 20px;
        }}
        main p, main li {{
            margin: 10px 0;
        }}
        main ul {{
            padding-left: 25px;
        }}
        form label {{
            display: block;
            margin-top: 15px;
            font-weight: 600;
        }}
        form input, form textarea {{
            width: 100%;
            padding: 8px;
            margin-top: 5px;
            border: 1px solid #3a3f52;
            border-radius: 4px;
            background: #12141c;
            color: #e6e6e6;
        }}
        form button {{
            margin-top: 20px;
            padding: 10px 30px;
            border: none;
            border-radius: 4px;
            background: #4ade80;
            color: #12141c;
            font-weight: 700;
            cursor: pointer;
        }}
        dt {{
            font-weight: 700;
            margin-top: 20px;
        }}
        footer {{
            text-align: center;
            padding: 30px;
            opacity: 0.6;
            font-size: 0.9em;
        }}
    </style>
</head>
<body>
    <header>
        <h1>MUNIA</h1>
        <nav>
            {nav}
        </nav>
    </header>
    <main>
{body}
    </main>
    <footer>
        <p>MUNIA - controller interface adapters for retro consoles</p>
    </footer>
</body>
</html>"#,
        nav = nav(routes),
    )
}

fn index_body(routes: &RouteTable) -> String {
    format!(
        r#"        <h2>Show your inputs, frame by frame</h2>
        <p>MUNIA is a small interface board that sits between an original
        controller and its console, and mirrors every button press and stick
        movement to your PC over USB. Stream overlays, input displays, and
        latency tooling all see exactly what the console sees.</p>
        <ul>
            <li>Passthrough design: the console keeps its original timing</li>
            <li>USB HID on the PC side, no drivers required</li>
            <li>Open firmware, field-updatable over USB</li>
        </ul>
        <p>Curious which controllers are covered? Head over to the
        <a href="{devices}">devices page</a>, or check the
        <a href="{faq}">FAQ</a>.</p>"#,
        devices = href(routes, "devices"),
        faq = href(routes, "faq"),
    )
}

const DEVICES_BODY: &str = r#"        <h2>Supported devices</h2>
        <p>Two board variants cover the supported console families:</p>
        <ul>
            <li><strong>MUNIA</strong> - NES, SNES, Nintendo 64, and GameCube
            controllers, with console passthrough on all four.</li>
            <li><strong>MUSIA</strong> - PlayStation 1 and PlayStation 2
            controllers, including DualShock analog modes.</li>
        </ul>
        <p>Both boards enumerate as standard USB HID game controllers, so they
        also work as plain PC adapters when no console is attached.</p>"#;

const FAQ_BODY: &str = r#"        <h2>Frequently asked questions</h2>
        <dl>
            <dt>Does MUNIA add input lag on the console side?</dt>
            <dd>No. The controller lines pass straight through to the console;
            the board only listens.</dd>
            <dt>Can I use it without a console?</dt>
            <dd>Yes, the adapter doubles as a USB controller adapter for PC
            games and emulators.</dd>
            <dt>How do I update the firmware?</dt>
            <dd>Over USB with the desktop app, no programmer needed.</dd>
            <dt>Which input display software works with it?</dt>
            <dd>Anything that reads USB HID game controllers; the desktop app
            ships with ready-made skins for each supported pad.</dd>
        </dl>"#;

fn contact_body(routes: &RouteTable) -> String {
    format!(
        r#"        <h2>Contact</h2>
        <p>Questions, firmware trouble, or a skin to share? Send a message.</p>
        <form action="{action}" method="post">
            <label for="name">Name</label>
            <input id="name" name="name" type="text" required>
            <label for="email">Email</label>
            <input id="email" name="email" type="email" required>
            <label for="message">Message</label>
            <textarea id="message" name="message" rows="6" required></textarea>
            <button type="submit">Send</button>
        </form>"#,
        action = href(routes, "contact"),
    )
}

fn success_body(routes: &RouteTable) -> String {
    format!(
        r#"        <h2>Message sent</h2>
        <p>Thanks for getting in touch. You will hear back at the address you
        provided.</p>
        <p><a href="{home}">Back to the homepage</a></p>"#,
        home = href(routes, "index"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_come_from_reverse_lookup() {
        let table = RouteTable::site();
        let html = render(Page::Index, &table);
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/devices">Devices</a>"#));
        assert!(html.contains(r#"<a href="/faq">FAQ</a>"#));
        assert!(html.contains(r#"<a href="/contact">Contact</a>"#));
    }

    #[test]
    fn test_contact_form_posts_to_contact_route() {
        let table = RouteTable::site();
        let html = render(Page::Contact, &table);
        assert!(html.contains(r#"action="/contact""#));
        assert!(html.contains(r#"method="post""#));
    }

    #[test]
    fn test_every_page_renders_a_document() {
        let table = RouteTable::site();
        for page in [
            Page::Index,
            Page::Contact,
            Page::Devices,
            Page::Faq,
            Page::Success,
        ] {
            let html = render(page, &table);
            assert!(html.starts_with("<!DOCTYPE html>"), "page {page:?}");
            assert!(html.contains("</html>"), "page {page:?}");
        }
    }

    #[test]
    fn test_page_titles() {
        let table = RouteTable::site();
        assert!(render(Page::Devices, &table).contains("<title>Devices - MUNIA</title>"));
        assert!(render(Page::Success, &table).contains("<title>Message sent - MUNIA</title>"));
    }
}
