use chrono::Datelike;

const PROVIDER_VARS: [&str; 4] = [
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "EMAILJS_API_URL",
];

fn main() {
    // Capture the current year for the footer
    let build_year = chrono::Utc::now().year();
    println!("cargo:rustc-env=BUILD_YEAR={}", build_year);

    // Provider settings are read with option_env!, so both the server binary
    // and the WASM bundle must be rebuilt when they change
    for var in PROVIDER_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    println!("cargo:rerun-if-changed=build.rs");
}
