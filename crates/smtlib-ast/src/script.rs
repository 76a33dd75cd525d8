//! A script: an ordered sequence of commands.

use crate::command::Command;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Script(pub Vec<Command>);

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self(commands)
    }

    pub fn commands(&self) -> &[Command] {
        &self.0
    }
}

impl FromIterator<Command> for Script {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Script(iter.into_iter().collect())
    }
}
