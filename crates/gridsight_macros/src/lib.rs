use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};

/// Time a kernel entry point when the `perf_stats` feature is enabled.
///
/// The function body is wrapped in a drop guard that logs the elapsed time
/// through bevy's `debug!` once the call returns. Without the feature the
/// guard is compiled out entirely.
///
/// # Features
/// - Threshold is given in microseconds (default 100µs); faster calls stay silent
/// - Auto-detects a `max_iterations: usize` parameter and reports the budget
///   alongside the timing, so slow searches can be told apart from big budgets
///
/// # Example
/// ```ignore
/// #[profile(250)]
/// pub fn find_path_in<G: SearchGraph>(graph: &mut G, start: G::Position,
///     target: G::Position, max_iterations: usize) -> Option<GridPath<..>> {
///     // ... work ...
/// }
/// ```
#[proc_macro_attribute]
pub fn profile(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let threshold_us: u128 = if attr.is_empty() {
        100
    } else {
        attr.to_string().trim().parse().unwrap_or(100)
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;
    let fn_name_str = sig.ident.to_string();

    let has_budget_param = sig.inputs.iter().any(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(pat_ident) = &*pat_type.pat {
                return pat_ident.ident == "max_iterations";
            }
        }
        false
    });

    let guard = profile_guard(&fn_name_str, threshold_us, has_budget_param);

    let output = quote! {
        #(#attrs)*
        #vis #sig {
            #[cfg(feature = "perf_stats")]
            let _profile_timer = {
                #guard
            };

            #block
        }
    };

    output.into()
}

fn profile_guard(name: &str, threshold_us: u128, has_budget_param: bool) -> TokenStream2 {
    let (budget_field, budget_init, log_line) = if has_budget_param {
        (
            quote! { budget: usize, },
            quote! { budget: max_iterations, },
            quote! {
                bevy::prelude::debug!("[PERF] {} (budget {}): {:?}", self.name, self.budget, elapsed);
            },
        )
    } else {
        (
            quote! {},
            quote! {},
            quote! {
                bevy::prelude::debug!("[PERF] {}: {:?}", self.name, elapsed);
            },
        )
    };

    quote! {
        struct ProfileGuard {
            name: &'static str,
            start: std::time::Instant,
            #budget_field
        }
        impl Drop for ProfileGuard {
            fn drop(&mut self) {
                let elapsed = self.start.elapsed();
                if elapsed.as_micros() > #threshold_us {
                    #log_line
                }
            }
        }
        ProfileGuard {
            name: #name,
            start: std::time::Instant::now(),
            #budget_init
        }
    }
}
