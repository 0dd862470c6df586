// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Browser interop: smooth scrolling and viewport visibility.
//
// Both go through `document::eval`, so the same code drives the web and
// desktop renderers.

use dablie_core::RevealLatch;
use dablie_core::error::Result;
use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::{debug, warn};

/// JavaScript that smooth-scrolls the element with `anchor` as its id into
/// view. Does nothing if no such element exists.
pub fn scroll_script(anchor: &str) -> Result<String> {
    let id = serde_json::to_string(anchor)?;
    Ok(format!(
        r#"document.getElementById({id})?.scrollIntoView({{ behavior: "smooth", block: "start" }});"#
    ))
}

/// JavaScript that reports visibility changes of the element `anchor` back
/// to Rust until it first intersects the viewport.
///
/// Without IntersectionObserver support the element is reported visible
/// straight away. A missing element reports nothing.
pub fn reveal_script(anchor: &str, threshold: f64) -> Result<String> {
    let id = serde_json::to_string(anchor)?;
    Ok(format!(
        r#"
const el = document.getElementById({id});
if (el) {{
    if (!("IntersectionObserver" in window)) {{
        dioxus.send(true);
    }} else {{
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                dioxus.send(entry.isIntersecting);
                if (entry.isIntersecting) {{
                    observer.disconnect();
                    return;
                }}
            }}
        }}, {{ threshold: {threshold} }});
        observer.observe(el);
    }}
}}
"#
    ))
}

pub fn scroll_into_view(anchor: &str) {
    match scroll_script(anchor) {
        Ok(script) => {
            let _ = eval(&script);
        }
        Err(e) => warn!(anchor, error = %e, "could not build scroll script"),
    }
}

/// Watch section `anchor` until it first scrolls into view, then latch.
///
/// Returns once the latch fires. If the observer never reports, the task
/// stays parked until its component unmounts and the section stays hidden.
pub async fn watch_first_reveal(
    anchor: &'static str,
    threshold: f64,
    mut latch: Signal<RevealLatch>,
) {
    let script = match reveal_script(anchor, threshold) {
        Ok(script) => script,
        Err(e) => {
            warn!(anchor, error = %e, "could not build reveal script");
            return;
        }
    };

    let mut observer = eval(&script);
    while let Ok(intersecting) = observer.recv::<bool>().await {
        if record_visibility(&mut latch, intersecting) {
            debug!(section = anchor, "section revealed");
            return;
        }
    }
    debug!(section = anchor, "visibility observer closed before reveal");
}

/// Feed one visibility report into the latch. Hidden reports never touch
/// the signal, so they do not re-render the section.
fn record_visibility(latch: &mut Signal<RevealLatch>, intersecting: bool) -> bool {
    if !intersecting || latch.peek().is_revealed() {
        return false;
    }
    latch.write().observe(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_script_targets_anchor() {
        let script = scroll_script("portfolio").unwrap();
        assert!(script.starts_with(r#"document.getElementById("portfolio")"#));
        assert!(script.contains(r#"behavior: "smooth""#));
    }

    #[test]
    fn anchors_are_escaped() {
        let script = scroll_script(r#"a"); alert("x"#).unwrap();
        assert!(script.contains(r#"getElementById("a\"); alert(\"x")"#));
    }

    #[test]
    fn reveal_script_embeds_threshold() {
        let script = reveal_script("partners", 0.25).unwrap();
        assert!(script.contains(r#"getElementById("partners")"#));
        assert!(script.contains("threshold: 0.25"));
        assert!(script.contains("observer.disconnect()"));
    }

    #[component]
    fn LatchReports(reports: Vec<bool>) -> Element {
        let mut latch = use_signal(RevealLatch::new);
        let fired: Vec<bool> = use_hook(|| {
            reports
                .iter()
                .map(|&seen| record_visibility(&mut latch, seen))
                .collect()
        });
        let revealed = latch.peek().is_revealed();
        let fired = fired.iter().map(|f| f.to_string()).collect::<Vec<_>>().join(",");
        rsx! { p { "{fired}|{revealed}" } }
    }

    fn run_reports(reports: Vec<bool>) -> String {
        let mut dom = VirtualDom::new_with_props(LatchReports, LatchReportsProps { reports });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn hidden_reports_leave_latch_untouched() {
        let html = run_reports(vec![false, false]);
        assert!(html.contains("false,false|false"), "{html}");
    }

    #[test]
    fn first_intersection_fires_once() {
        let html = run_reports(vec![false, true, false, true]);
        assert!(html.contains("false,true,false,false|true"), "{html}");
    }
}
