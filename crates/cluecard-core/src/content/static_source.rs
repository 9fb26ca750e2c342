use alloc::string::{String, ToString};
use core::convert::Infallible;

use super::WordListResource;

/// Resource id reported for the built-in list.
pub const SAMPLE_RESOURCE_ID: &str = "builtin:sample";

/// Default clue list used until a word list file is configured.
pub const SAMPLE_CLUE_LIST: &str = "\
category,keyword,clue1,clue2,clue3
Animals,Elephant,trunk,ivory,grey
Animals,Penguin,tuxedo,ice,waddle
Animals,Octopus,eight arms,ink,tentacle
Food,Pizza,cheese,slice,oven
Food,Pancake,syrup,flip,breakfast
Places,Library,books,quiet,borrow
Places,Airport,runway,gate,luggage
Objects,Umbrella,rain,open,handle
Objects,Compass,north,needle,map
Jobs,Firefighter,hose,ladder,siren
Jobs,Astronaut,rocket,helmet,orbit
Sports,Tennis,racket,net,serve
";

/// In-memory word list text.
#[derive(Debug, Clone, Copy)]
pub struct StaticResource<'a> {
    text: &'a str,
}

impl<'a> StaticResource<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl WordListResource for StaticResource<'_> {
    type Error = Infallible;

    fn fetch(&mut self, _resource_id: &str) -> Result<String, Self::Error> {
        Ok(self.text.to_string())
    }
}

pub const fn sample_resource() -> StaticResource<'static> {
    StaticResource::new(SAMPLE_CLUE_LIST)
}
