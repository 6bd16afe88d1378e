use std::path::PathBuf;

use anyhow::Result;

use super::super::{
    args::{GenerateArgs, GenerateCommand},
    exit_status::ExitStatus,
    report::print_outputs,
};
use crate::{
    config::{CONFIG_FILE_NAME, Config, load_config},
    generate::{Component, ComponentOutput, Inputs, run_component},
};

pub fn generate(cmd: GenerateCommand) -> Result<ExitStatus> {
    let GenerateCommand { components, args } = cmd;

    let root = args
        .inputs
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root)?;
    if args.verbose && !config_result.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    let config = apply_overrides(config_result.config, &args);
    let inputs = Inputs::from_config(&root, &config);

    let outputs: Vec<ComponentOutput> = selected_components(components)
        .into_iter()
        .map(|component| run_component(component, &inputs))
        .collect();

    print_outputs(&outputs, args.verbose)?;

    // Missing inputs and bad lines are reported, never fatal.
    Ok(ExitStatus::Success)
}

/// CLI flags take precedence over the config file.
fn apply_overrides(mut config: Config, args: &GenerateArgs) -> Config {
    let inputs = &args.inputs;
    if let Some(api) = &inputs.api {
        config.api_file = api.clone();
    }
    if let Some(framexml) = &inputs.framexml {
        config.framexml_file = framexml.clone();
    }
    if let Some(widget) = &inputs.widget {
        config.widget_file = widget.clone();
    }
    if let Some(events) = &inputs.events {
        config.events_file = events.clone();
    }
    config
}

/// Requested components in canonical order, each once. Empty means all.
fn selected_components(requested: Vec<Component>) -> Vec<Component> {
    if requested.is_empty() {
        return Component::all();
    }
    Component::all()
        .into_iter()
        .filter(|component| requested.contains(component))
        .collect()
}
