/// Asserts that running a block panics. The block may capture mutable state, it is assumed to be
/// left in a state the test expects to inspect afterwards.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
}

pub(crate) use assert_panics;
