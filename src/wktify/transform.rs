use crate::wktify::error::Error;
use serde_json::{Map, Number, Value};

pub const GEO_KEY: &str = "LocationGeo";
const LAT_KEY: &str = "latitude";
const LON_KEY: &str = "longitude";

// Truthiness as the archival tooling sees it: null, false, zero, and
// empty containers all leave the field alone.
fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn coordinate<'a>(geo: &'a Map<String, Value>, key: &'static str) -> Result<&'a Number, Error> {
    match geo.get(key) {
        Some(Value::Number(n)) => Ok(n),
        Some(_) => Err(Error::InvalidJSONType),
        None => Err(Error::MissingCoordinate(key)),
    }
}

// Longitude first, then latitude. Coordinates keep serde_json's default
// number rendering, so 1.0 stays "1.0" and integers stay integral.
fn wkt_point(geo: &Map<String, Value>) -> Result<String, Error> {
    let lat = coordinate(geo, LAT_KEY)?;
    let lon = coordinate(geo, LON_KEY)?;
    Ok(format!("POINT({} {})", lon, lat))
}

/// Replaces a truthy `LocationGeo` lat/lon object with its WKT point
/// string, in place. Every other field passes through untouched.
pub fn transform(mut record: Map<String, Value>) -> Result<Map<String, Value>, Error> {
    let wkt = match record.get(GEO_KEY) {
        None => return Ok(record),
        Some(v) if is_falsy(v) => return Ok(record),
        Some(Value::Object(geo)) => wkt_point(geo)?,
        Some(_) => return Err(Error::InvalidJSONType),
    };
    record.insert(GEO_KEY.to_string(), Value::String(wkt));
    Ok(record)
}

/// Decodes one JSONL record, transforms it, and re-encodes it as a
/// single compact line. Lines must hold a JSON object.
pub fn transform_line(line: &str) -> Result<String, Error> {
    let value: Value = serde_json::from_str(line)?;
    let record = match value {
        Value::Object(o) => transform(o)?,
        _ => return Err(Error::InvalidJSONType),
    };
    Ok(serde_json::to_string(&record)?)
}
