fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile all modular proto files
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(
            &[
                "proto/common.proto",
                "proto/racing.proto",
                "proto/sports.proto",
            ],
            &["proto"],
        )?;
    Ok(())
}
