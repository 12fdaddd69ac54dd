//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::errors::GeoResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the command's report
    ///
    /// # Returns
    /// The text to show the user, or an error
    fn run(&self) -> GeoResult<String>;

    /// Execute the command and print its report
    fn execute(&self) -> GeoResult<()> {
        let report = self.run()?;
        println!("{}", report);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches) -> GeoResult<Box<dyn Command>>;
}
