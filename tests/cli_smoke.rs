use std::path::PathBuf;

#[test]
fn cli_writes_both_pngs() {
    let dir = PathBuf::from("target").join("cli_smoke_out");
    let _ = std::fs::remove_dir_all(&dir);

    let exe = std::env::var_os("CARGO_BIN_EXE_brandgen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "brandgen.exe"
            } else {
                "brandgen"
            });
            p
        });

    let out_arg = dir.to_string_lossy().to_string();
    let status = std::process::Command::new(exe)
        .args(["--out", out_arg.as_str()])
        .status()
        .unwrap();

    assert!(status.success());
    assert!(dir.join("header.png").exists());
    assert!(dir.join("logo.png").exists());
}
