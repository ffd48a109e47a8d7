use shared::error::RenderError;

use crate::compose::Fragment;

/// Turns one fragment into markup. Implemented by the templating layer.
pub trait FragmentRenderer: Send + Sync {
    fn render(&self, fragment: &Fragment<'_>) -> Result<String, RenderError>;
}

/// Renders every fragment before joining them, so a failing fragment
/// never leaves a half-written response behind.
pub fn render_all(
    renderer: &dyn FragmentRenderer,
    fragments: &[Fragment<'_>],
) -> Result<String, RenderError> {
    let rendered = fragments
        .iter()
        .map(|fragment| renderer.render(fragment))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.concat())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
