use std::env;

fn main() {
    // Set the app name and bundle identifier based on the profile
    let profile = env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    if profile == "debug" {
        println!("cargo:rustc-env=APP_NAME=Final Boss Portfolio (Dev)");
        println!("cargo:rustc-env=BUNDLE_IDENTIFIER=dev.finalboss.portfolio-dev");
    } else {
        println!("cargo:rustc-env=APP_NAME=Final Boss Portfolio");
        println!("cargo:rustc-env=BUNDLE_IDENTIFIER=dev.finalboss.portfolio");
    }
}
