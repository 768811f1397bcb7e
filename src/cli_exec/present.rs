use serde::Serialize;

use fitcoach::pages::PageView;
use fitcoach::routes::LOGIN_ROUTE;

use super::*;

/// Redirect chains are short (guard -> login, form -> page); anything longer
/// is a loop.
const MAX_REDIRECTS: usize = 5;

#[derive(Serialize)]
struct Presented<'a> {
    route: Route,
    view: &'a PageView,
}

/// Follow redirects until a page renders, then print it.
///
/// A view carrying an error, or a bounce to the login page that no page asked
/// for, exits non-zero after printing.
pub(super) fn present(
    svc: &Service,
    start: Route,
    outcome: PageOutcome,
    json: bool,
) -> Result<()> {
    let mut route = start;
    let mut outcome = outcome;
    let mut notice = None;
    let mut bounced = false;

    for _ in 0..=MAX_REDIRECTS {
        match outcome {
            PageOutcome::Render(mut view) => {
                if view.notice.is_none() {
                    view.notice = notice;
                }
                return show(route, &view, json, bounced);
            }
            PageOutcome::Redirect { to, notice: n } => {
                tracing::debug!(from = %route, %to, "following redirect");
                bounced = to == LOGIN_ROUTE && n.is_none();
                if n.is_some() {
                    notice = n;
                }
                route = to;
                outcome = pages::open(svc, to, None, None)?;
            }
        }
    }

    anyhow::bail!("too many redirects (last: {})", route)
}

fn show(route: Route, view: &PageView, json: bool, bounced: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&Presented { route, view })
                .context("serialize page json")?
        );
    } else {
        println!("[{}]", route);
        print!("{}", view);
    }

    if let Some(error) = &view.error {
        anyhow::bail!("{}", error);
    }
    if bounced {
        anyhow::bail!("no valid session for this page (run `fitcoach login`)");
    }
    Ok(())
}
