//! WASM bindings for day-state.
//!
//! Exposes day resolution, month batches and strict request validation to
//! JavaScript via `wasm-bindgen`. All complex types cross the boundary as
//! JSON strings, in the same shapes the `day-state` CLI reads and writes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p day-state-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/day_state_wasm.wasm
//! ```

use day_state::{DayContext, DayRequest, ResolvedDay};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Compact per-day summary used by `resolveMonth`.
#[derive(Serialize)]
struct MonthDayDto {
    day: u32,
    variant: &'static str,
    reasons: Vec<&'static str>,
    mark: Option<&'static str>,
    pressable: bool,
}

impl From<&ResolvedDay> for MonthDayDto {
    fn from(d: &ResolvedDay) -> Self {
        Self {
            day: d.day,
            variant: d.variant.as_str(),
            reasons: d.reasons.iter().map(|r| r.as_str()).collect(),
            mark: d.mark.map(|m| m.as_str()),
            pressable: d.pressable,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_request(json: &str) -> Result<DayRequest, JsValue> {
    DayRequest::from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid day request JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve one day cell.
///
/// `request_json` is a day request (`year`, `month`, `day` plus context
/// fields). Returns the resolved day as JSON. Invalid dates degrade to an
/// out-of-range cell rather than failing.
#[wasm_bindgen(js_name = "resolveDay")]
pub fn resolve_day(request_json: &str) -> Result<String, JsValue> {
    let request = parse_request(request_json)?;
    let day = day_state::resolve_request(&request);
    to_json(&day)
}

/// Resolve every day of a one-based month.
///
/// `context_json` is a day context (no date fields). Returns a JSON array of
/// `{day, variant, reasons, mark, pressable}` summaries when `summary` is
/// true, or of full resolved days otherwise.
#[wasm_bindgen(js_name = "resolveMonth")]
pub fn resolve_month(
    context_json: &str,
    year: i32,
    month: u32,
    summary: bool,
) -> Result<String, JsValue> {
    let context = DayContext::from_json(context_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid day context JSON: {}", e)))?;
    let days = day_state::resolve_month(year, month, &context)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    if summary {
        let dtos: Vec<MonthDayDto> = days.iter().map(MonthDayDto::from).collect();
        to_json(&dtos)
    } else {
        to_json(&days)
    }
}

/// Strictly validate a day request.
///
/// Throws with the validation message for invalid dates, an end date in
/// single-select mode, or an inverted range; returns the ISO date otherwise.
#[wasm_bindgen(js_name = "validateDay")]
pub fn validate_day(request_json: &str) -> Result<String, JsValue> {
    let request = parse_request(request_json)?;
    request
        .validate()
        .map(|date| date.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
