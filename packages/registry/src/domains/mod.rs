// Registry domains - each owns its models, inputs, actions, and events

pub mod providers;
pub mod verifiers;
