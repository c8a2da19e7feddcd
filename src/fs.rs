use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::data::DEFAULT_SIZE;
use crate::parser;
use crate::problem::Problem;
use crate::LoadProblem;

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

impl<P: AsRef<Path>> LoadProblem for P {
    fn load_problem_with_size(&self, default_size: u8) -> Result<Problem, Box<dyn Error>> {
        let text = read_file(self)?;
        Ok(parser::parse(&text, default_size)?)
    }

    fn load_problem(&self) -> Result<Problem, Box<dyn Error>> {
        self.load_problem_with_size(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_sample() {
        let problem = "inputs/sample-20x20.txt".load_problem().unwrap();
        assert_eq!(problem.size, 20);
        assert_eq!(problem.destinations.len(), 39);
    }

    #[test]
    fn missing_file() {
        assert!("inputs/does-not-exist.txt".load_problem().is_err());
    }
}
