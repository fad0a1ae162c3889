use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=MEDTAGGER_ENV");

    let env = env::var("MEDTAGGER_ENV")
        .map(|env| env.trim().to_lowercase())
        .unwrap_or_default();

    let env = match env.as_str() {
        "" | "dev" | "development" => "development",
        "prod" | "production" => "production",
        other => panic!("Unknown MEDTAGGER_ENV build target: {}", other),
    };

    println!("cargo:warning=Using Env {}", env);
    println!("cargo:rustc-cfg=feature=\"medtagger_env_{}\"", env);
}
