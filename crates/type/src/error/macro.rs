// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Builds an [`Error`](crate::Error) from anything implementing
/// [`IntoDiagnostic`](crate::IntoDiagnostic).
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error::new($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Wraps [`error!`] in `Err`.
#[macro_export]
macro_rules! err {
	($diagnostic:expr) => {
		Err($crate::error!($diagnostic))
	};
}

/// Returns early from the enclosing function with [`err!`].
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return $crate::err!($diagnostic)
	};
}

#[cfg(test)]
mod tests {
	use crate::{Diagnostic, Error};

	fn diagnostic() -> Diagnostic {
		Diagnostic {
			code: "TEST_001".to_string(),
			message: "test failure".to_string(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	fn fails() -> crate::Result<()> {
		return_error!(diagnostic());
	}

	#[test]
	fn test_return_error() {
		let err = fails().unwrap_err();
		assert_eq!(err.code(), "TEST_001");
	}

	#[test]
	fn test_err() {
		let result: Result<(), Error> = err!(diagnostic());
		assert_eq!(result.unwrap_err().diagnostic(), diagnostic());
	}
}
