use rowheight::Height;

/// Produces and lays out the reusable templates heights are measured with.
///
/// A template is an offscreen instance of the row's visual representation (a cell, a view, a
/// widget) that can be configured with model data and laid out at the list's current content
/// width. Creating and laying one out is the expensive step this whole stack exists to avoid
/// repeating; the resolver calls [`TemplateMeasurer::create_template`] at most once per reuse
/// identifier and keeps the instance for all later measurements.
///
/// Measurement must behave as a pure function of the template's configuration and the
/// available width: given the same model data, it returns the same height. The measurer holds
/// no cache of its own.
pub trait TemplateMeasurer {
    /// The reusable template instance for one reuse identifier.
    type Template;
    /// Error produced when a template cannot be created or laid out.
    ///
    /// Errors pass through [`crate::HeightResolver`] unchanged and are never cached; the next
    /// lookup for the same position measures again.
    type Error;

    /// Creates the reusable template for `identifier`.
    fn create_template(&mut self, identifier: &str) -> Result<Self::Template, Self::Error>;

    /// Lays out the (already configured) `template` at the current content width and returns
    /// the resulting height.
    fn measure(&mut self, template: &mut Self::Template) -> Result<Height, Self::Error>;
}
