// Any failure in either stage prints `error`; nothing else is reported.
fn main() {
    let input = std::env::args().nth(1).unwrap_or_default();
    let output = match poweq::parse_str(&input) {
        Ok(expr) => expr.render(),
        Err(_) => "error".to_string(),
    };
    println!("{}", output);
}
