//! Declarative state enums.

/// Declare a state enum together with its `State` implementation.
///
/// Each variant is given the tag hosts match on. Variants listed under
/// `final:` are terminal; those under `error:` are error states. The enum
/// serialises as its tag.
///
/// # Example
///
/// ```
/// use pageflow::core::State;
/// use pageflow::state_enum;
///
/// state_enum! {
///     pub enum UploadState {
///         Queued => "queued",
///         Sending => "sending",
///         Sent => "sent",
///         Rejected => "rejected",
///     }
///     final: [Sent, Rejected]
///     error: [Rejected]
/// }
///
/// assert_eq!(UploadState::Sending.name(), "sending");
/// assert!(UploadState::Rejected.is_error());
/// assert_eq!(UploadState::ALL.len(), 4);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $tag:literal
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $tag)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $tag),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum Upload {
            Queued => "queued",
            Sending => "sending",
            Sent => "sent",
            Rejected => "rejected",
        }
        final: [Sent, Rejected]
        error: [Rejected]
    }

    #[test]
    fn generates_tags_and_sets() {
        assert_eq!(Upload::Queued.name(), "queued");
        assert!(!Upload::Sending.is_final());
        assert!(Upload::Sent.is_final());
        assert!(!Upload::Sent.is_error());
        assert!(Upload::Rejected.is_error());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            Upload::ALL,
            &[Upload::Queued, Upload::Sending, Upload::Sent, Upload::Rejected]
        );
    }

    #[test]
    fn serialises_as_tag() {
        assert_eq!(serde_json::to_string(&Upload::Sending).unwrap(), "\"sending\"");
        let back: Upload = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(back, Upload::Rejected);
        assert_eq!(Upload::Sent.to_string(), "sent");
    }

    #[test]
    fn works_without_final_or_error() {
        state_enum! {
            pub enum Toggle {
                On => "on",
                Off => "off",
            }
        }

        assert!(!Toggle::On.is_final());
        assert!(!Toggle::Off.is_error());
    }
}
