use std::env;

fn main() {
    pretty_env_logger::init();

    let api_key = env::args().nth(1).unwrap_or_default();
    let metric = env::args().nth(2).unwrap_or_else(|| "demo".into());

    measurely::init(measurely::ClientOptions {
        api_key: api_key.into(),
        debug: true,
        ..Default::default()
    });

    let result = measurely::capture(&metric, 1i64);
    println!("success: {}", result.success);
    println!("message: {}", result.message);
}
