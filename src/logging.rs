use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "log")] {
        macro_rules! debug {
            ( $( $t:tt )* ) => {
                ::log::debug!( $( $t )* )
            }
        }

        macro_rules! trace {
            ( $( $t:tt )* ) => {
                ::log::trace!( $( $t )* )
            }
        }

        macro_rules! warn {
            ( $( $t:tt )* ) => {
                ::log::warn!( $( $t )* )
            }
        }
    } else {
        #[allow(unused_macros)]
        macro_rules! debug {
            ( $( $e:expr ),* $(,)* ) => {
                if false {
                    $(
                        let _ = &$e;
                    )*
                }
            }
        }

        #[allow(unused_macros)]
        macro_rules! trace {
            ( $( $e:expr ),* $(,)* ) => {
                if false {
                    $(
                        let _ = &$e;
                    )*
                }
            }
        }

        #[allow(unused_macros)]
        macro_rules! warn {
            ( $( $e:expr ),* $(,)* ) => {
                if false {
                    $(
                        let _ = &$e;
                    )*
                }
            }
        }
    }
}
