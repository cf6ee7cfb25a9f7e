//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ArchivistConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Helper to compose an [`ArchivistConfig`] from `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> ArchivistConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    ArchivistConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// Loads configuration from CLI arguments with an isolated home directory.
pub fn load_from_cli(cli_args: &[&str]) -> ArchivistConfig {
    load_with_dotfile(None, cli_args)
}

/// Loads configuration through the full loader, optionally writing
/// `contents` to `$HOME/.archivist.toml` first.
pub fn load_with_dotfile(contents: Option<&str>, cli_args: &[&str]) -> ArchivistConfig {
    use ortho_config::OrthoConfig;

    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    if let Some(text) = contents {
        std::fs::write(temp_dir.path().join(".archivist.toml"), text)
            .expect("dotfile should be written");
    }
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<std::ffi::OsString> = vec![std::ffi::OsString::from("archivist")];
    args.extend(cli_args.iter().map(std::ffi::OsString::from));

    ArchivistConfig::load_from_iter(args).expect("config should load")
}
