/// File names under which cuDNN is shipped on this platform, most generic first.
pub fn cudnn_library_names() -> &'static [&'static str] {
    #[cfg(target_os = "windows")]
    {
        &["cudnn64_7.dll", "cudnn64_8.dll"]
    }
    #[cfg(target_os = "linux")]
    {
        &["libcudnn.so", "libcudnn.so.7", "libcudnn.so.8"]
    }
    #[cfg(target_os = "macos")]
    {
        &["libcudnn.dylib"]
    }
    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        &[]
    }
}

/// Returns the platform name string.
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "windows")]
    { "windows" }
    #[cfg(target_os = "linux")]
    { "linux" }
    #[cfg(target_os = "macos")]
    { "macos" }
    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    { "unknown" }
}

/// System-wide directory holding the config file.
pub fn system_config_dir() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        format!(r"{}\cudnn-dynload", programdata)
    }
    #[cfg(not(windows))]
    {
        "/etc/cudnn-dynload".to_string()
    }
}
