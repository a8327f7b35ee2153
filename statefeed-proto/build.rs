// Copyright (c) 2023 MASSA LABS <info@massa.net>

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "build-proto")]
    prost::build()?;

    #[cfg(not(feature = "build-proto"))]
    println!("cargo:warning=build-proto feature is disabled, you can update the generated code from protobuf files by running: cargo check --features build-proto");

    Ok(())
}

#[cfg(feature = "build-proto")]
mod prost {
    pub fn build() -> Result<(), Box<dyn std::error::Error>> {
        prost_build::Config::new()
            .out_dir("src/")
            .compile_protos(&["proto/trie/v1/leaves.proto"], &["proto/"])
            .map_err(|e| e.into())
    }
}
