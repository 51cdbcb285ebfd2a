use treeconf::Config;

fn main() -> Result<(), treeconf::ConfigError> {
    let config = Config::builder()
        .with_file("tests/fixtures/default.json", true)
        .with_file("tests/fixtures/production.json", false)
        .build()?;

    println!(
        "{} (env={}, debug={})",
        config.string("name")?,
        config.must_string("env", Some("development")),
        config.must_bool("debug", Some(false)),
    );
    println!("Hobbies: {}", config.get("hobbies")?);
    println!("Nested: {}", config.string("nested.1.2.3.0.b")?);

    if let Err(e) = config.float("clothes.pants.waist") {
        println!("Overridden: {e}");
    }

    Ok(())
}
