pub const MAIN_AFTER_HELP: &str = r#"
Reads JSONL records on STDIN and writes them back to STDOUT with the
'LocationGeo' field rewritten from a latitude/longitude object to a
Well-Known Text point, longitude first. Suitable for preparing archive
exports for bulk import into stores whose geography columns expect WKT.

Example:

$ echo '{"id":1,"LocationGeo":{"latitude":37.7749,"longitude":-122.4194}}' | wktify
  {"id":1,"LocationGeo":"POINT(-122.4194 37.7749)"}

Records without a 'LocationGeo' field, or with a null or empty one, pass
through unchanged. Blank input lines are dropped. The first malformed
record aborts the run with a non-zero exit; records already written
remain on STDOUT.
"#;
