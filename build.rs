fn main() {
    let icon = "assets/icon.ico";
    println!("cargo:rerun-if-changed={}", icon);
    // The window icon is rendered at runtime; the .ico is only embedded when present.
    if std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() == "windows"
        && std::path::Path::new(icon).exists()
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon(icon);
        res.compile().expect("Failed to compile Windows resources");
    }
}
