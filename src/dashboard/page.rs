//! # Dashboard Page
//!
//! Server-side rendering of the single dashboard page. The layout is a
//! handlebars template; dropdown options and the map figure are filled in from
//! the dataset, and a small inline script binds the controls to the JSON
//! endpoints.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;

use super::controls::ShowWinnersButton;
use super::map::Figure;
use crate::domain::Dataset;

const PAGE_TEMPLATE: &str = "dashboard";

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1.0">
<title>{{heading}}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
<style>
body { font-family: sans-serif; }
.section { margin: auto; }
select { width: 100%; padding: 6px; }
</style>
</head>
<body>
<h1 style="text-align: center">{{heading}}</h1>

<div style="width: 70%; margin: auto">
<div id="wc-map"></div>
</div>

<div style="text-align: center; margin-top: 20px">
<h3>A) Countries that have won the World Cup:</h3>
<div id="list-of-winners"></div>
<button id="{{button_id}}">Show All Winners</button>
</div>

<div class="section" style="width: 50%">
<h3>B) Select a country to see how many times it has won:</h3>
<select id="country-dropdown">
<option value="">Select a country</option>
{{#each countries}}
<option value="{{this}}">{{this}}</option>
{{/each}}
</select>
<div id="country-wins-output" style="margin-top: 10px"></div>
</div>

<div class="section" style="width: 50%; margin-bottom: 40px">
<h3>C) Select a year to see the Winner and Runner-up:</h3>
<select id="year-dropdown">
<option value="">Select a year</option>
{{#each years}}
<option value="{{this}}">{{this}}</option>
{{/each}}
</select>
<div id="year-output" style="margin-top: 10px"></div>
</div>

<script id="wc-map-figure" type="application/json">{{{figure}}}</script>
<script>
const figure = JSON.parse(document.getElementById("wc-map-figure").textContent);
Plotly.newPlot("wc-map", figure.data, figure.layout);

async function fetchJson(url) {
  const response = await fetch(url);
  if (!response.ok) {
    throw new Error(response.status + " " + response.statusText);
  }
  return response.json();
}

let nClicks = 0;
document.getElementById("{{button_id}}").addEventListener("click", async () => {
  nClicks += 1;
  const body = await fetchJson("/api/winners?n_clicks=" + nClicks);
  const target = document.getElementById("list-of-winners");
  target.replaceChildren();
  if (body.winners.length > 0) {
    const list = document.createElement("ul");
    for (const winner of body.winners) {
      const item = document.createElement("li");
      item.textContent = winner;
      list.appendChild(item);
    }
    target.appendChild(list);
  }
});

function bindLookup(dropdownId, outputId, endpoint, param) {
  document.getElementById(dropdownId).addEventListener("change", async (event) => {
    const value = event.target.value;
    const url = value === "" ? endpoint : endpoint + "?" + param + "=" + encodeURIComponent(value);
    const body = await fetchJson(url);
    document.getElementById(outputId).textContent = body.text;
  });
}

bindLookup("country-dropdown", "country-wins-output", "/api/country-wins", "country");
bindLookup("year-dropdown", "year-output", "/api/year-info", "year");
</script>
</body>
</html>"#;

/// Renders the dashboard page from a pre-registered template.
pub struct PageRenderer {
    engine: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.set_strict_mode(true);
        engine
            .register_template_string(PAGE_TEMPLATE, PAGE_HTML)
            .context("Failed to register dashboard template")?;
        Ok(Self { engine })
    }

    pub fn render(&self, dataset: &Dataset, figure: &Figure) -> Result<String> {
        let figure_json = serde_json::to_string(figure)
            .context("Failed to serialize map figure")?
            .replace("</", "<\\/");

        self.engine
            .render(
                PAGE_TEMPLATE,
                &json!({
                    "heading": "FIFA World Cup Dashboard",
                    "button_id": ShowWinnersButton::ID,
                    "countries": dataset.wins().winners(),
                    "years": dataset.years(),
                    "figure": figure_json,
                }),
            )
            .context("Failed to render dashboard page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::MapSettings;
    use crate::dashboard::map::build_figure;

    fn render_page() -> String {
        let dataset = Dataset::load().unwrap();
        let figure = build_figure(dataset.wins(), &MapSettings::default());
        PageRenderer::new().unwrap().render(&dataset, &figure).unwrap()
    }

    #[test]
    fn test_page_has_named_controls() {
        let html = render_page();

        assert!(html.contains(r#"id="show-winners-btn""#));
        assert!(html.contains(r#"id="country-dropdown""#));
        assert!(html.contains(r#"id="year-dropdown""#));
        assert!(html.contains(r#"id="wc-map""#));
    }

    #[test]
    fn test_dropdowns_populated_from_dataset() {
        let html = render_page();

        assert!(html.contains(r#"<option value="Brazil">Brazil</option>"#));
        assert!(html.contains(r#"<option value="1930">1930</option>"#));
        assert!(html.contains(r#"<option value="2022">2022</option>"#));
        assert!(!html.contains(r#"<option value="Netherlands">"#));
        assert_eq!(html.matches("<option value=").count(), 2 + 8 + 22);
    }

    #[test]
    fn test_embedded_figure_cannot_close_script() {
        let html = render_page();
        let start = html.find(r#"<script id="wc-map-figure""#).unwrap();
        let body = &html[start..];
        let end = body.find("</script>").unwrap();

        assert!(body[..end].contains("choropleth"));
        assert!(!body[..end].contains("</extra>"));
    }
}
