use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A value a flag can be bound to.
pub trait ArgValue: Sized {
    /// Builds the value from every token given after the flag.
    fn from_values(values: &[String]) -> Result<Self, String>;

    /// The value when the flag is never given; `None` makes the flag required.
    fn absent() -> Option<Self> {
        None
    }
}

/// A single token flag value, also usable inside `Vec<T>` and `Option<T>`.
pub trait Scalar: Sized {
    fn parse_arg(raw: &str) -> Result<Self, String>;
}

pub fn single<T: Scalar>(values: &[String]) -> Result<T, String> {
    match values {
        [one] => T::parse_arg(one),
        [] => Err("expected a value".to_string()),
        many => Err(format!("expected one value, got {}", many.len())),
    }
}

scalar_arg!(String, char, usize, u32, u64, i32, i64, f32, f64);

impl ArgValue for bool {
    fn from_values(values: &[String]) -> Result<Self, String> {
        match values {
            [] => Ok(true),
            [one] => one.parse::<bool>().map_err(|e| e.to_string()),
            many => Err(format!("expected at most one value, got {}", many.len())),
        }
    }

    fn absent() -> Option<Self> {
        Some(false)
    }
}

impl<T: Scalar> ArgValue for Vec<T> {
    fn from_values(values: &[String]) -> Result<Self, String> {
        values.iter().map(|v| T::parse_arg(v)).collect()
    }

    fn absent() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T: Scalar> ArgValue for Option<T> {
    fn from_values(values: &[String]) -> Result<Self, String> {
        single(values).map(Some)
    }

    fn absent() -> Option<Self> {
        Some(None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArgError {
    Missing(String),
    Invalid { flag: String, reason: String },
    Unknown(String),
    Stray(String),
    Rejected { flag: String, message: String },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::Missing(flag) => write!(f, "missing required flag --{}", flag),
            ArgError::Invalid { flag, reason } => write!(f, "--{}: {}", flag, reason),
            ArgError::Unknown(flag) => write!(f, "unrecognized flag {}", flag),
            ArgError::Stray(token) => write!(f, "unexpected argument '{}'", token),
            ArgError::Rejected { flag, message } => write!(f, "--{}: {}", flag, message),
        }
    }
}

impl std::error::Error for ArgError {}

struct Given {
    name: String,
    short: bool,
    values: Vec<String>,
}

struct Declared {
    name: &'static str,
    ty: &'static str,
    default: &'static str,
}

pub struct Args {
    program: String,
    given: Vec<Given>,
    stray: Vec<String>,
    help: bool,
    declared: Vec<Declared>,
}

fn normalize(name: &str) -> String {
    name.replace('-', "_")
}

fn flag_name(name: &str) -> String {
    name.replace('_', "-")
}

impl Args {
    pub fn from_env() -> Args {
        Args::parse(std::env::args())
    }

    /// Splits argv into flags and the tokens following each of them. Nothing
    /// is checked until the flags are declared.
    pub fn parse<I, S>(argv: I) -> Args
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv
            .next()
            .map(|p| {
                std::path::Path::new(&p)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or(p)
            })
            .unwrap_or_else(|| "tool".to_string());

        let mut args = Args {
            program,
            given: Vec::new(),
            stray: Vec::new(),
            help: false,
            declared: Vec::new(),
        };
        // the flag that takes the following bare tokens
        let mut open = false;
        for token in argv {
            if token == "-h" || token == "--help" {
                args.help = true;
                open = false;
            } else if let Some(flag) = token.strip_prefix("--") {
                match flag.split_once('=') {
                    Some((name, value)) => {
                        args.given.push(Given {
                            name: normalize(name),
                            short: false,
                            values: vec![value.to_string()],
                        });
                        open = false;
                    }
                    None => {
                        args.given.push(Given {
                            name: normalize(flag),
                            short: false,
                            values: Vec::new(),
                        });
                        open = true;
                    }
                }
            } else if token.len() == 2
                && token.starts_with('-')
                && token.chars().nth(1).map_or(false, char::is_alphabetic)
            {
                args.given.push(Given {
                    name: token[1..].to_string(),
                    short: true,
                    values: Vec::new(),
                });
                open = true;
            } else {
                match args.given.last_mut() {
                    Some(last) if open => last.values.push(token),
                    _ => args.stray.push(token),
                }
            }
        }
        args
    }

    pub fn declare(&mut self, name: &'static str, ty: &'static str, default: &'static str) {
        self.declared.push(Declared { name, ty, default });
    }

    /// Resolves short flags against the declared ones and rejects anything
    /// undeclared. `Ok(true)` means help was asked for.
    pub fn validate(&mut self) -> Result<bool, ArgError> {
        for given in self.given.iter_mut().filter(|g| g.short) {
            let mut candidates = self
                .declared
                .iter()
                .filter(|d| d.name.starts_with(given.name.as_str()));
            match (candidates.next(), candidates.next()) {
                (Some(only), None) => {
                    given.name = only.name.to_string();
                    given.short = false;
                }
                _ => return Err(ArgError::Unknown(format!("-{}", given.name))),
            }
        }
        if self.help {
            return Ok(true);
        }
        if let Some(unknown) = self
            .given
            .iter()
            .find(|g| !self.declared.iter().any(|d| d.name == g.name))
        {
            return Err(ArgError::Unknown(format!("--{}", flag_name(&unknown.name))));
        }
        if let Some(stray) = self.stray.first() {
            return Err(ArgError::Stray(stray.clone()));
        }
        Ok(false)
    }

    pub fn ready(&mut self) {
        match self.validate() {
            Ok(true) => {
                print!("{}", self.usage());
                std::process::exit(0);
            }
            Ok(false) => {
                log::trace!("{} flags parsed", self.given.len());
            }
            Err(err) => self.fail(err),
        }
    }

    /// The value of a flag that was given, `Ok(None)` if it wasn't. Repeated
    /// flags accumulate their values.
    pub fn lookup<T: ArgValue>(&self, name: &str) -> Result<Option<T>, ArgError> {
        let mut found = false;
        let mut values = Vec::new();
        for given in self.given.iter().filter(|g| g.name == name) {
            found = true;
            values.extend(given.values.iter().cloned());
        }
        if !found {
            return Ok(None);
        }
        T::from_values(&values)
            .map(Some)
            .map_err(|reason| ArgError::Invalid {
                flag: flag_name(name),
                reason,
            })
    }

    pub fn try_get<T: ArgValue>(&self, name: &str) -> Result<T, ArgError> {
        self.lookup::<T>(name)?
            .or_else(T::absent)
            .ok_or_else(|| ArgError::Missing(flag_name(name)))
    }

    pub fn get<T: ArgValue>(&self, name: &str) -> T {
        match self.try_get(name) {
            Ok(value) => value,
            Err(err) => self.fail(err),
        }
    }

    /// `None` when the flag is absent, so the caller's default applies.
    pub fn get_or<T: ArgValue>(&self, name: &str) -> Option<T> {
        match self.lookup(name) {
            Ok(value) => value,
            Err(err) => self.fail(err),
        }
    }

    pub fn reject(&self, name: &str, message: &str) -> ! {
        self.fail(ArgError::Rejected {
            flag: flag_name(name),
            message: message.to_string(),
        })
    }

    pub fn fail(&self, err: ArgError) -> ! {
        log::debug!("rejecting command line: {:?}", err);
        eprintln!(
            "{}: {}\n\n{}",
            "error".if_supports_color(Stream::Stderr, |t| t.red()),
            err,
            self.usage()
        );
        std::process::exit(2);
    }

    pub fn usage(&self) -> String {
        let mut out = format!("usage: {} [options]\n\noptions:\n", self.program);
        let rows: Vec<(String, String)> = self
            .declared
            .iter()
            .map(|d| {
                let flag = match d.ty {
                    "" | "bool" => format!("--{}", flag_name(d.name)),
                    ty => format!("--{} <{}>", flag_name(d.name), ty.replace(' ', "")),
                };
                let note = match (d.ty, d.default) {
                    ("", _) => String::new(),
                    (_, "") if d.ty.starts_with("Vec") || d.ty.starts_with("Option") => {
                        String::new()
                    }
                    (_, "") => "(required)".to_string(),
                    (_, default) => format!("[default: {}]", default),
                };
                (flag, note)
            })
            .chain(std::iter::once((
                "-h, --help".to_string(),
                "print this message".to_string(),
            )))
            .collect();
        let width = rows.iter().map(|(flag, _)| flag.len()).max().unwrap_or(0);
        for (flag, note) in rows {
            out.push_str(&format!("  {:<width$}  {}\n", flag, note, width = width));
        }
        out
    }
}
