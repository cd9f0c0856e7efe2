use std::fs;

/// (section, key, TOML type) for every setting Config reads
const SETTINGS: &[(&str, &str, &str)] = &[
    ("input", "strip_frontmatter", "boolean"),
    ("output", "pretty", "boolean"),
    ("output", "indent", "integer"),
];

fn main() {
    // The bundled config is loaded with unwrap_or_default at runtime, so reject
    // a broken one here instead
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for &(section, key, expected) in SETTINGS {
        let value = table
            .get(section)
            .and_then(toml::Value::as_table)
            .and_then(|section| section.get(key));
        match value {
            Some(value) if value.type_str() == expected => {}
            Some(value) => panic!(
                "default_config.toml: {}.{} must be a {}, found {}",
                section,
                key,
                expected,
                value.type_str()
            ),
            None => panic!("default_config.toml is missing {}.{}", section, key),
        }
    }

    let indent = table["output"]["indent"].as_integer().unwrap_or(0);
    if indent < 0 {
        panic!("default_config.toml: output.indent must not be negative");
    }
}
