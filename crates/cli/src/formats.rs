use std::error::Error;

use clap::Args;

use fitsid::{Matcher, Registry};

#[derive(Debug, Clone, Args)]
pub struct Formats {}

impl Formats {
    pub fn exec(self) -> Result<(), Box<dyn Error>> {
        for entry in Registry::builtin().formats() {
            println!("{} (.{}):", entry.name, entry.extensions.join(", ."));
            for signature in &entry.catalog.signatures {
                for rule in &signature.rules {
                    let expected = match &rule.matcher {
                        Matcher::Exact(v) => format!("{:?}", v),
                        Matcher::OneOf(vs) => format!("one of {:?}", vs),
                    };
                    println!(" * {:<8} {}", rule.key, expected);
                }
            }
        }
        Ok(())
    }
}
