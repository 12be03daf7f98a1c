/// Asserts that running `$run` panics. With `contains "..."`, also asserts that the panic message
/// includes the given text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "expression didn't panic"
        )
    };
    ($run:block, contains $expected:literal) => {{
        let payload = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("expression didn't panic"),
            Err(payload) => payload,
        };
        let message = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or_default();
        assert!(
            message.contains($expected),
            "panic message {message:?} doesn't contain {:?}",
            $expected
        );
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
