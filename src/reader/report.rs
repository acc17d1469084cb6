/// Render a line read back from a round-trip file.
///
/// A line that parses as an integer is the magic-number sentinel: the report
/// carries the reconstituted value alongside its double. Anything else passes
/// through verbatim. Parseability is the whole test, so `007` or `-5` take
/// the doubling path just like the designated magic value.
pub fn report_line(line: &str) -> String {
    if let Ok(value) = line.parse::<i64>() {
        // Doubling i64::MAX would overflow; such lines pass through verbatim
        if let Some(doubled) = value.checked_mul(2) {
            return format!("Magic number, {}, multiplied by 2 = {}", value, doubled);
        }
    }
    line.to_string()
}
