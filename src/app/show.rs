use crate::config::Config;

#[derive(Debug, Default, Clone, Copy)]
pub struct Show;

impl Show {
    pub fn run(self, config: &Config) {
        println!("{:#?}", config);
    }
}
