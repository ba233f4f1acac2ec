//! Layer composition helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::QuotawatchConfig;

/// Configuration source, in ascending precedence.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order, as `QuotawatchConfig::load` would.
pub fn merge(layers: &[(Layer, Value)]) -> QuotawatchConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers.iter().cloned() {
        match layer {
            Layer::Defaults => composer.push_defaults(value),
            Layer::File => composer.push_file(value, None),
            Layer::Environment => composer.push_environment(value),
            Layer::Cli => composer.push_cli(value),
        }
    }

    QuotawatchConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
