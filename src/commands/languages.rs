use code_runner::Registry;

pub fn cmd_languages(registry: &Registry) {
    let entries = registry.entries();
    let width = entries.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, template) in entries {
        println!("{key:<width$}  {template}");
    }
}
