//! HTML page generation
//!
//! Renders the self-contained dashboard page. The layout and callback wiring
//! are embedded as JSON; the inline script builds the controls, posts control
//! values to the update endpoint and draws the returned figures with plotly.js.

use super::callbacks::CallbackSpec;
use super::layout::DashboardLayout;

/// plotly.js bundle loaded by the page
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render the dashboard page
pub fn render_page(layout: &DashboardLayout, callbacks: &[CallbackSpec], update_url: &str) -> String {
    let layout_json = script_safe_json(&serde_json::to_string(layout).unwrap_or_else(|_| "{}".into()));
    let callbacks_json =
        script_safe_json(&serde_json::to_string(callbacks).unwrap_or_else(|_| "[]".into()));
    let update_url_json = script_safe_json(&serde_json::to_string(update_url).unwrap_or_else(|_| "\"\"".into()));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{plotly}"></script>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    <div class="control">
        <input id="{dropdown_id}-search" type="search" placeholder="{placeholder}">
        <select id="{dropdown_id}"></select>
    </div>
    <br>
    <div id="{pie_id}" class="graph"></div>
    <br>
    <p>{slider_label} <span id="{slider_id}-value">{slider_value}</span></p>
    <div id="{slider_id}" class="control slider">
        <input id="{slider_id}-low" type="range">
        <input id="{slider_id}-high" type="range">
    </div>
    <div id="{scatter_id}" class="graph"></div>
    <script>
        const LAYOUT = {layout_json};
        const CALLBACKS = {callbacks_json};
        const UPDATE_URL = {update_url_json};
    </script>
    <script>{js}</script>
</body>
</html>"#,
        title = html_escape(&layout.title),
        plotly = PLOTLY_CDN,
        css = inline_css(),
        js = inline_javascript(),
        dropdown_id = layout.dropdown.id,
        placeholder = html_escape(&layout.dropdown.placeholder),
        slider_id = layout.slider.id,
        slider_label = html_escape(&layout.slider.label),
        slider_value = format!("{} - {}", layout.slider.value.low, layout.slider.value.high),
        pie_id = layout.graphs.first().map(|g| g.id.id()).unwrap_or_default(),
        scatter_id = layout.graphs.get(1).map(|g| g.id.id()).unwrap_or_default(),
        layout_json = layout_json,
        callbacks_json = callbacks_json,
        update_url_json = update_url_json,
    )
}

/// Escape text for HTML element content and attribute values
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep embedded JSON from closing the surrounding `<script>` element
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}

fn inline_css() -> &'static str {
    r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0 auto; max-width: 1100px; padding: 16px; }
h1 { text-align: center; color: #503D36; font-size: 40px; }
.control { margin: 8px 0; }
.control select, .control input[type=search] { width: 100%; padding: 6px; font-size: 16px; box-sizing: border-box; }
.slider { position: relative; height: 24px; }
.slider input[type=range] { position: absolute; width: 100%; pointer-events: none; background: none; }
.slider input[type=range]::-webkit-slider-thumb { pointer-events: all; }
.slider input[type=range]::-moz-range-thumb { pointer-events: all; }
.graph { min-height: 450px; }
"#
}

fn inline_javascript() -> &'static str {
    r#"
(function () {
    const dropdown = document.getElementById(LAYOUT.dropdown.id);
    const search = document.getElementById(LAYOUT.dropdown.id + "-search");
    const low = document.getElementById(LAYOUT.slider.id + "-low");
    const high = document.getElementById(LAYOUT.slider.id + "-high");
    const readout = document.getElementById(LAYOUT.slider.id + "-value");

    function fillOptions(filter) {
        const current = dropdown.value || LAYOUT.dropdown.value;
        dropdown.innerHTML = "";
        for (const opt of LAYOUT.dropdown.options) {
            if (filter && !opt.label.toLowerCase().includes(filter.toLowerCase())) continue;
            const el = document.createElement("option");
            el.value = opt.value;
            el.textContent = opt.label;
            el.selected = opt.value === current;
            dropdown.appendChild(el);
        }
    }

    for (const input of [low, high]) {
        input.min = LAYOUT.slider.min;
        input.max = LAYOUT.slider.max;
        input.step = LAYOUT.slider.step;
    }
    low.value = LAYOUT.slider.value[0];
    high.value = LAYOUT.slider.value[1];

    // Range inputs snap to step; keep the exact initial value until a thumb moves.
    let range = LAYOUT.slider.value.slice();
    function showRange() {
        readout.textContent = range[0] + " - " + range[1];
    }
    function readThumbs() {
        range = [Number(low.value), Number(high.value)].sort((a, b) => a - b);
        showRange();
    }

    function controlValues() {
        return { "site-dropdown": dropdown.value, "payload-slider": range };
    }

    async function refresh(output) {
        const response = await fetch(UPDATE_URL, {
            method: "POST",
            headers: { "Content-Type": "application/json" },
            body: JSON.stringify({ output: output, inputs: controlValues() }),
        });
        if (!response.ok) {
            console.error("update failed", output, response.status);
            return;
        }
        const body = await response.json();
        Plotly.react(output, body.figure.data, body.figure.layout);
    }

    function changed(input) {
        for (const cb of CALLBACKS) {
            if (input === null || cb.inputs.includes(input)) refresh(cb.output);
        }
    }

    search.addEventListener("input", () => fillOptions(search.value));
    dropdown.addEventListener("change", () => changed(LAYOUT.dropdown.id));
    for (const input of [low, high]) {
        input.addEventListener("change", () => {
            readThumbs();
            changed(LAYOUT.slider.id);
        });
    }

    showRange();
    fillOptions("");
    changed(null);
})();
"#
}
