use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // VERGEN_CARGO_TARGET_TRIPLE doubles as the default `--target`.
    vergen_gitcl::Emitter::default()
        .add_instructions(
            &vergen_gitcl::CargoBuilder::default()
                .target_triple(true)
                .build()?,
        )?
        .add_instructions(&vergen_gitcl::GitclBuilder::default().sha(true).build()?)?
        .add_instructions(&vergen_gitcl::RustcBuilder::default().semver(true).build()?)?
        .emit()?;
    Ok(())
}
