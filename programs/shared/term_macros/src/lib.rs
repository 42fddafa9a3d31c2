//! Shared plumbing for the command line tools in this workspace.
//!
//! Every tool is a `fn main() { tool! { ... } }`: the macro declares the
//! flags, installs the stderr logger, parses `std::env::args()` and runs the
//! body. Line oriented tools then stream stdin through [`readin!`].
//!
//! ```ignore
//! use term_macros::*;
//!
//! fn main() {
//!     tool! {
//!         args:
//!             - min_count: usize = 0;
//!             - sep: String = "\t".to_string();
//!             - max_words: usize = 1000;
//!                 ? max_words == 0
//!                 => "max_words can't be zero"
//!             - lowercase;
//!         ;
//!
//!         body: || {
//!             run(min_count, &sep, max_words, lowercase)
//!         }
//!     }
//! }
//! ```

pub use linereader;
pub use std::io::{Read, Write};

use owo_colors::{OwoColorize, Stream};

/// Declares the flags of a tool and runs its body.
///
/// `- name: Type = default;` is optional with a default, `- name: Type;` is
/// required (or empty for `Vec` / `None` for `Option`), `- name;` is a switch.
/// A declaration may be followed by `? condition => "message"`, checked right
/// after the value is bound.
#[macro_export]
macro_rules! tool {
    (
        args:
            $( - $name:ident $( : $ty:ty $( = $default:expr )? )? ; $( ? $check:expr => $msg:literal )? )*
        ;

        body: || $body:block
    ) => {{
        $crate::logger::init();
        let mut __args = $crate::args::Args::from_env();
        $( __args.declare(stringify!($name), stringify!($($ty)?), stringify!($($($default)?)?)); )*
        __args.ready();
        $(
            $crate::tool!(@arg __args $name $( : $ty $( = $default )? )?);
            $( if $check { __args.reject(stringify!($name), $msg) } )?
        )*
        let __outcome = (|| $body)();
        $crate::Outcome::conclude(__outcome);
    }};

    (@arg $args:ident $name:ident) => {
        let $name: bool = $args.get::<bool>(stringify!($name));
    };

    (@arg $args:ident $name:ident : $ty:ty) => {
        let $name: $ty = $args.get::<$ty>(stringify!($name));
    };

    (@arg $args:ident $name:ident : $ty:ty = $default:expr) => {
        let $name: $ty = $args.get_or::<$ty>(stringify!($name)).unwrap_or_else(|| $default);
    };
}

/// Streams stdin line by line (newline included) into the closure, with a
/// buffered stdout writer bound to `$wtr`.
///
/// The closure returns `()` or `std::io::Result<()>`; the first error stops
/// the loop. The whole macro evaluates to `std::io::Result<()>`.
#[macro_export]
macro_rules! readin {
    ($wtr:ident, |$line:ident : &[u8]| $body:expr) => {{
        let __stdin = ::std::io::stdin();
        let __stdout = ::std::io::stdout();
        #[allow(unused_mut)]
        let mut $wtr = ::std::io::BufWriter::new(__stdout.lock());
        let mut __reader = $crate::linereader::LineReader::new(__stdin.lock());
        let mut __each = |$line: &[u8]| $body;
        let mut __status: ::std::io::Result<()> = Ok(());
        while let Some(__next) = __reader.next_line() {
            __status = __next.and_then(|__line| $crate::LineFlow::into_flow(__each(__line)));
            if __status.is_err() {
                break;
            }
        }
        __status.and_then(|()| $crate::Write::flush(&mut $wtr))
    }};
}

/// Implements [`args::Scalar`] and [`args::ArgValue`] for `FromStr` types so
/// they can be used as flag values.
#[macro_export]
macro_rules! scalar_arg {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::args::Scalar for $t {
                fn parse_arg(raw: &str) -> Result<Self, String> {
                    raw.parse::<$t>().map_err(|e| e.to_string())
                }
            }

            impl $crate::args::ArgValue for $t {
                fn from_values(values: &[String]) -> Result<Self, String> {
                    $crate::args::single(values)
                }
            }
        )+
    };
}

/// A closed set of string choices usable as a flag value.
///
/// ```ignore
/// choices! {
///     pub enum Counting {
///         Sum => "sum",
///         Sqrt => "sqrt",
///     }
/// }
/// ```
#[macro_export]
macro_rules! choices {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const CHOICES: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, String> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(format!(
                        "invalid choice '{}' (choose from {})",
                        other,
                        Self::CHOICES.join(", ")
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $crate::scalar_arg!($name);
    };
}

pub mod args;
pub mod logger;

/// What a `tool!` body may return.
pub trait Outcome {
    fn conclude(self);
}

impl Outcome for () {
    fn conclude(self) {}
}

impl<E: std::fmt::Display> Outcome for Result<(), E> {
    fn conclude(self) {
        if let Err(err) = self {
            log::debug!("body returned an error, exiting with status 1");
            eprintln!(
                "{}: {}",
                "error".if_supports_color(Stream::Stderr, |t| t.red()),
                err
            );
            std::process::exit(1);
        }
    }
}

/// What a `readin!` closure may return.
pub trait LineFlow {
    fn into_flow(self) -> std::io::Result<()>;
}

impl LineFlow for () {
    fn into_flow(self) -> std::io::Result<()> {
        Ok(())
    }
}

impl LineFlow for std::io::Result<()> {
    fn into_flow(self) -> std::io::Result<()> {
        self
    }
}
