pub use anyhow::{
    anyhow,
    ensure,
};
pub use paste::paste;
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

// This macro creates an enum which derives from thiserror::Error, and also
// creates constructor functions in snake case for each of the enum variants;
// the constructors hand back an anyhow::Error so they can be returned or
// used with `?` directly.
#[macro_export]
macro_rules! err_impl {
    ($errtype:ident,
        $(#[$errinfo:meta] $item:ident(String),)+
    ) => {
        #[derive(Debug, Error, PartialEq, Eq)]
        pub enum $errtype {
            $(#[$errinfo] $item(String)),+
        }

        impl $errtype {
            $(
                paste! {
                    pub fn [<$item:snake>](in_: &str) -> anyhow::Error {
                        anyhow!{$errtype::$item(in_.into())}
                    }
                }
            )+
        }
    };
}

pub use crate::err_impl;
