// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Conversion of caller values into the text consumed by the slug pipeline.
//!
//! Every value is only borrowed: the pipeline works on a fresh copy of its
//! textual form and never touches caller-owned data. Types without a textual
//! representation simply do not implement [`SlugSource`], so passing one is
//! rejected by the compiler instead of failing at runtime.

use std::{
    borrow::Cow,
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
};

/// Values that can be turned into slug input text.
///
/// # Examples
///
/// ```
/// use slugsmith::SlugSource;
///
/// assert_eq!(42_u32.to_slug_source(), "42");
/// assert_eq!(None::<&str>.to_slug_source(), "");
/// assert_eq!(Some("Hi",).to_slug_source(), "Hi");
/// ```
pub trait SlugSource
{
    /// Returns the canonical textual representation of the value.
    ///
    /// Absent values yield empty text.
    fn to_slug_source(&self,) -> Cow<'_, str,>;
}

impl SlugSource for str
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        Cow::Borrowed(self,)
    }
}

impl SlugSource for String
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        Cow::Borrowed(self.as_str(),)
    }
}

impl SlugSource for Cow<'_, str,>
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        Cow::Borrowed(self.as_ref(),)
    }
}

impl SlugSource for Path
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        self.to_string_lossy()
    }
}

impl SlugSource for PathBuf
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        self.as_path().to_string_lossy()
    }
}

impl<T: SlugSource,> SlugSource for Option<T,>
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        match self {
            Some(value,) => value.to_slug_source(),
            None => Cow::Borrowed("",),
        }
    }
}

impl<T: SlugSource + ?Sized,> SlugSource for &T
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        (**self).to_slug_source()
    }
}

impl<T: SlugSource + ?Sized,> SlugSource for Box<T,>
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        (**self).to_slug_source()
    }
}

impl<T: SlugSource + ?Sized,> SlugSource for Rc<T,>
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        (**self).to_slug_source()
    }
}

impl<T: SlugSource + ?Sized,> SlugSource for Arc<T,>
{
    fn to_slug_source(&self,) -> Cow<'_, str,>
    {
        (**self).to_slug_source()
    }
}

macro_rules! display_source {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SlugSource for $ty
            {
                fn to_slug_source(&self,) -> Cow<'_, str,>
                {
                    Cow::Owned(self.to_string(),)
                }
            }
        )*
    };
}

display_source!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

#[cfg(test)]
mod tests
{
    use std::{borrow::Cow, path::PathBuf, sync::Arc};

    use super::SlugSource;

    #[test]
    fn absent_value_becomes_empty_text()
    {
        assert_eq!(None::<String,>.to_slug_source(), "");
        assert_eq!(None::<&str,>.to_slug_source(), "");
    }

    #[test]
    fn present_option_delegates_to_inner_value()
    {
        assert_eq!(Some(7_i64,).to_slug_source(), "7");
        assert_eq!(Some(Some("nested",),).to_slug_source(), "nested");
    }

    #[test]
    fn borrowed_strings_are_not_copied()
    {
        let text = String::from("Hi there!",);
        assert!(matches!(text.to_slug_source(), Cow::Borrowed("Hi there!")));
        assert!(matches!("plain".to_slug_source(), Cow::Borrowed("plain")));
    }

    #[test]
    fn numbers_and_scalars_use_display_form()
    {
        assert_eq!(42_u8.to_slug_source(), "42");
        assert_eq!((-3_i32).to_slug_source(), "-3");
        assert_eq!(2.5_f64.to_slug_source(), "2.5");
        assert_eq!('x'.to_slug_source(), "x");
        assert_eq!(true.to_slug_source(), "true");
    }

    #[test]
    fn smart_pointers_and_paths_delegate()
    {
        let boxed: Box<str,> = Box::from("boxed",);
        assert_eq!(boxed.to_slug_source(), "boxed");
        assert_eq!(Arc::new(String::from("shared",),).to_slug_source(), "shared");
        assert_eq!(PathBuf::from("docs/intro.md",).to_slug_source(), "docs/intro.md");
    }
}
