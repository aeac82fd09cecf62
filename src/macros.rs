/// A macro wrapper for returning a [`Result::Err`] that allows logging of
/// errors.
///
/// Specifically, in debug builds with the `log` feature enabled, before an
/// `Err` is returned a call is made to the `log` crate at the given level
/// describing the error and its location.  With the `backtrace` feature, the
/// stack backtrace is logged as well.
///
/// Usage:  `err!(debug, KeyErr::MissingTerminator)`
macro_rules! err {
  ($level:ident, $error:expr) => {{
    let error = $error;

    #[cfg(all(debug_assertions, feature = "log"))]
    {
      ::log::$level!("{}:{}: {:?}", file!(), line!(), &error);
      #[cfg(feature = "backtrace")]
      {
        let bt = backtrace::Backtrace::new();
        ::log::$level!("{:?}", bt);
      }
    }

    error
  }};
}
