use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Parses the command line. Returns `None` after printing the usage text
    /// when one of the image paths is missing.
    pub fn parse<I, T>(&mut self, itr: I) -> Option<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        if !Self::contains_image_file_arguments(&matches) {
            self.print_usage();
            return None;
        }
        Some(Self::extract_arguments(&matches))
    }

    pub fn print_usage(&mut self) {
        self.command
            .print_help()
            .expect("Writing usage text to standard output must not fail");
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_image1_file_argument(command);
        Self::register_image2_file_argument(command)
    }

    fn register_image1_file_argument(command: Command) -> Command {
        command.arg(Self::create_image1_file_argument())
    }

    fn register_image2_file_argument(command: Command) -> Command {
        command.arg(Self::create_image2_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_image1_file_argument() -> Arg {
        arg!(img1: --img1 <PATH> "Path to the reference image file")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_image2_file_argument() -> Arg {
        arg!(img2: --img2 <PATH> "Path to the image file to compare against the reference")
            .value_parser(value_parser!(PathBuf))
    }

    fn contains_image_file_arguments(matches: &ArgMatches) -> bool {
        matches.contains_id("img1") && matches.contains_id("img2")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            image1_file: Self::extract_image1_file_argument(matches),
            image2_file: Self::extract_image2_file_argument(matches),
        }
    }

    fn extract_image1_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("img1")
            .expect("Argument img1 must be present, but was unset")
            .clone()
    }

    fn extract_image2_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("img2")
            .expect("Argument img2 must be present, but was unset")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
