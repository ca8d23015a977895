//! Objects a log message is about
//!
//! A subject is rendered two ways: its `Display` form, prepended to text
//! messages and stored as the `object` field, and its type name, stored as
//! the `objectType` field of structured records.

use std::fmt;

/// Field holding the subject's display form
pub const OBJECT_FIELD: &str = "object";
/// Field holding the subject's type name
pub const OBJECT_TYPE_FIELD: &str = "objectType";

/// Something that can be logged about: a remote, an object, a directory
///
/// # Example
///
/// ```
/// use fslog::Subject;
/// use std::fmt;
///
/// struct Remote(String);
///
/// impl fmt::Display for Remote {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Subject for Remote {}
///
/// let remote = Remote("drive:backup".into());
/// assert!(remote.type_name().ends_with("Remote"));
/// ```
pub trait Subject: fmt::Display {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl Subject for str {}

impl Subject for String {}

impl<T: Subject + ?Sized> Subject for &T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Either a directory path or the remote it lives on
#[derive(Clone, Copy)]
pub enum DirSubject<'a> {
    Fs(&'a dyn Subject),
    Dir(&'a str),
}

impl fmt::Display for DirSubject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirSubject::Fs(fs) => write!(f, "{}", fs),
            DirSubject::Dir(dir) => f.write_str(dir),
        }
    }
}

impl Subject for DirSubject<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            DirSubject::Fs(fs) => fs.type_name(),
            DirSubject::Dir(_) => std::any::type_name::<str>(),
        }
    }
}

impl fmt::Debug for DirSubject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirSubject::Fs(fs) => f.debug_tuple("Fs").field(&fs.to_string()).finish(),
            DirSubject::Dir(dir) => f.debug_tuple("Dir").field(dir).finish(),
        }
    }
}

/// Subject for logging about `dir` on `fs`
///
/// The root directory of a remote is the empty string, which reads badly
/// in a log line, so the remote itself stands in for it.
pub fn log_dir_name<'a>(fs: &'a dyn Subject, dir: &'a str) -> DirSubject<'a> {
    if dir.is_empty() {
        DirSubject::Fs(fs)
    } else {
        DirSubject::Dir(dir)
    }
}
