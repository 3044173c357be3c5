//! Integration test: LazyLibrary
//!
//! Exercises the load-once handle with libraries that are known to be
//! missing or present, independent of whether cuDNN is installed.
//!
//! Run with: cargo test --test lazy_library_test -- --nocapture

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use cudnn_dynload::loader;
use cudnn_dynload::{DynloadError, LazyLibrary};

static MISSING_OPENS: AtomicUsize = AtomicUsize::new(0);

fn open_missing() -> cudnn_dynload::Result<(libloading::Library, PathBuf)> {
    MISSING_OPENS.fetch_add(1, Ordering::SeqCst);
    loader::open_first(&[PathBuf::from("/nonexistent/dir/libnot_a_real_library.so")])
}

static MISSING: LazyLibrary = LazyLibrary::new("missing", open_missing);

#[test]
fn test_missing_library_is_reported_unavailable() {
    cudnn_dynload_common::logging::try_init_logging();

    assert!(!MISSING.is_loaded());
    assert!(MISSING.handle().is_none());
    assert!(MISSING.path().is_none());
    assert!(MISSING.is_initialized());

    match MISSING.load_error() {
        Some(DynloadError::LibraryNotFound { tried, last_error }) => {
            assert_eq!(tried, &["/nonexistent/dir/libnot_a_real_library.so".to_string()]);
            assert!(!last_error.is_empty());
            #[cfg(unix)]
            assert!(last_error.contains("libnot_a_real_library"));
        }
        other => panic!("expected LibraryNotFound, got {:?}", other),
    }
}

#[test]
fn test_missing_library_is_not_retried() {
    for _ in 0..10 {
        assert!(!MISSING.is_loaded());
    }
    assert!(!MISSING.symbol_present("cudnnCreate"));

    assert_eq!(MISSING.load_attempts(), 1);
    assert_eq!(MISSING_OPENS.load(Ordering::SeqCst), 1);
}

#[test]
#[should_panic(expected = "cannot invoke method cudnnConvolutionForward")]
fn test_enforce_loaded_names_the_function() {
    MISSING.enforce_loaded("cudnnConvolutionForward");
}

#[test]
#[should_panic(expected = "cudnnPoolingBackward")]
fn test_resolve_on_missing_library_names_the_function() {
    type Pfn = unsafe extern "C" fn() -> i32;
    let _f: Pfn = unsafe { MISSING.resolve::<Pfn>("cudnnPoolingBackward") };
}

#[test]
fn test_lazy_until_first_use() {
    static UNTOUCHED_OPENS: AtomicUsize = AtomicUsize::new(0);

    fn open_untouched() -> cudnn_dynload::Result<(libloading::Library, PathBuf)> {
        UNTOUCHED_OPENS.fetch_add(1, Ordering::SeqCst);
        loader::open_first(&[])
    }

    static UNTOUCHED: LazyLibrary = LazyLibrary::new("untouched", open_untouched);

    assert_eq!(UNTOUCHED.label(), "untouched");
    assert!(!UNTOUCHED.is_initialized());
    assert_eq!(UNTOUCHED.load_attempts(), 0);
    assert_eq!(UNTOUCHED_OPENS.load(Ordering::SeqCst), 0);

    // An empty candidate list still records a failure.
    assert!(UNTOUCHED.load_error().is_some());
    assert_eq!(UNTOUCHED.load_attempts(), 1);
}

#[cfg(target_os = "linux")]
mod present {
    use std::ffi::{c_char, CStr};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use cudnn_dynload::loader;
    use cudnn_dynload::LazyLibrary;

    static LIBC_OPENS: AtomicUsize = AtomicUsize::new(0);

    fn open_libc() -> cudnn_dynload::Result<(libloading::Library, PathBuf)> {
        LIBC_OPENS.fetch_add(1, Ordering::SeqCst);
        loader::open_first(&[PathBuf::from("libc.so.6")])
    }

    static LIBC: LazyLibrary = LazyLibrary::new("libc", open_libc);

    #[test]
    fn test_present_library_is_reported_available() {
        assert!(LIBC.is_loaded());
        assert!(LIBC.load_error().is_none());
        assert_eq!(LIBC.path(), Some(PathBuf::from("libc.so.6").as_path()));
    }

    #[test]
    fn test_concurrent_first_use_loads_once() {
        let barrier = Arc::new(std::sync::Barrier::new(16));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    LIBC.is_loaded()
                })
            })
            .collect();

        for h in handles {
            assert!(h.join().expect("thread panicked"));
        }

        for _ in 0..100 {
            assert!(LIBC.handle().is_some());
        }

        assert_eq!(LIBC.load_attempts(), 1);
        assert_eq!(LIBC_OPENS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_forwards_the_call() {
        type StrLen = unsafe extern "C" fn(*const c_char) -> usize;

        let text = CStr::from_bytes_with_nul(b"cudnn\0").expect("valid C string");
        for _ in 0..3 {
            let strlen: StrLen = unsafe { LIBC.resolve::<StrLen>("strlen") };
            assert_eq!(unsafe { strlen(text.as_ptr()) }, 5);
        }
        assert_eq!(LIBC_OPENS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_symbol_presence() {
        assert!(LIBC.symbol_present("strlen"));
        assert!(!LIBC.symbol_present("cudnnCreate"));
    }

    #[test]
    #[should_panic(expected = "cannot invoke method cudnnSetConvolutionGroupCount")]
    fn test_resolve_missing_symbol_names_the_function() {
        type Pfn = unsafe extern "C" fn() -> i32;
        let _f: Pfn = unsafe { LIBC.resolve::<Pfn>("cudnnSetConvolutionGroupCount") };
    }
}
