// WebAssembly bindings for the browser pages
use crate::calc;
use crate::codec::{Codec, CodecError, Representation};
use crate::config::{Config, GraphRange};
use crate::units::{self, UnitCategory};
use crate::viewer;
use crate::wiki;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct MultitoolWasm {
    config: Config,
}

#[derive(Serialize)]
struct HitView {
    title: String,
    snippet: String,
    url: String,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
}

fn codec_error(e: CodecError) -> JsValue {
    JsValue::from_str(&e.user_message())
}

#[wasm_bindgen]
impl MultitoolWasm {
    /// Optional TOML config content; defaults apply when omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<MultitoolWasm, JsValue> {
        let config = match config_content {
            Some(content) => Config::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => Config::empty(),
        };
        Ok(Self { config })
    }

    /// Formatted result, or "" when the input has no conversion
    #[wasm_bindgen]
    pub fn convert(&self, category: &str, from: &str, to: &str, value: &str) -> String {
        match units::convert_str(category, from, to, value, self.config.display.precision) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(category, from, to, error = %e, "no conversion");
                String::new()
            }
        }
    }

    /// JSON array of category names
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<String, JsValue> {
        to_json(&UnitCategory::ALL)
    }

    /// JSON array of unit names, in display order
    #[wasm_bindgen]
    pub fn units(&self, category: &str) -> Result<String, JsValue> {
        let category: UnitCategory = category.parse().map_err(|c| {
            JsValue::from_str(&format!("Unknown unit category: {}", c))
        })?;
        to_json(&category.units())
    }

    #[wasm_bindgen]
    pub fn text_to_binary(&self, text: &str) -> Result<String, JsValue> {
        Codec::new(self.config.limits)
            .convert(Representation::Text, Representation::Binary, text)
            .map_err(codec_error)
    }

    #[wasm_bindgen]
    pub fn binary_to_text(&self, input: &str) -> Result<String, JsValue> {
        Codec::new(self.config.limits)
            .convert(Representation::Binary, Representation::Text, input)
            .map_err(codec_error)
    }

    #[wasm_bindgen]
    pub fn text_to_hex(&self, text: &str) -> Result<String, JsValue> {
        Codec::new(self.config.limits)
            .convert(Representation::Text, Representation::Hex, text)
            .map_err(codec_error)
    }

    #[wasm_bindgen]
    pub fn hex_to_text(&self, input: &str) -> Result<String, JsValue> {
        Codec::new(self.config.limits)
            .convert(Representation::Hex, Representation::Text, input)
            .map_err(codec_error)
    }

    /// Evaluate and format for the calculator display
    #[wasm_bindgen]
    pub fn evaluate(&self, expression: &str) -> Result<String, JsValue> {
        let value = calc::evaluate_within(expression, &self.config.limits)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(calc::format_number(value))
    }

    /// JSON array of {x, y} points. Bounds fall back to the configured range.
    #[wasm_bindgen]
    pub fn graph(
        &self,
        expression: &str,
        x_min: Option<f64>,
        x_max: Option<f64>,
    ) -> Result<String, JsValue> {
        self.config
            .limits
            .check(expression)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let range = GraphRange {
            x_min: x_min.unwrap_or(self.config.graph.x_min),
            x_max: x_max.unwrap_or(self.config.graph.x_max),
            ..self.config.graph
        };
        range
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let points = calc::sample_graph(expression, &range)
            .map_err(|e| JsValue::from_str(&format!("Graph error: {}", e)))?;
        to_json(&points)
    }

    /// JSON of {format, columns, rows} for an uploaded file
    #[wasm_bindgen]
    pub fn view_table(&self, file_name: &str, content: &str) -> Result<String, JsValue> {
        let table = viewer::load_table_within(file_name, content, &self.config.limits)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_json(&table)
    }

    #[wasm_bindgen]
    pub fn wiki_search_url(&self, query: &str) -> Result<String, JsValue> {
        wiki::search_url(&self.config.wiki, query).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// JSON array of {title, snippet, url} with snippets already stripped of markup
    #[wasm_bindgen]
    pub fn wiki_parse(&self, body: &str) -> Result<String, JsValue> {
        let hits = wiki::parse_search_response(body)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let views: Vec<HitView> = hits
            .iter()
            .map(|hit| HitView {
                title: hit.title.clone(),
                snippet: hit.plain_snippet(),
                url: hit.article_url(&self.config.wiki),
            })
            .collect();
        to_json(&views)
    }
}
