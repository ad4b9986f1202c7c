use crate::domain::model::Scale;

/// Static text the host shows around the converter, looked up by direction.
pub trait StringResources {
    /// Screen header for a conversion from `from` to `to`.
    fn head(&self, from: Scale, to: Scale) -> String;
    /// Label of the input field when the user types a `scale` temperature.
    fn label(&self, scale: Scale) -> String;
}
