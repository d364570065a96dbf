//! Builds the `GET /` sitemap: every `.route("/path", get(..).post(..))` call
//! under `src/routes` becomes one `RouteInfo` per HTTP method.

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use syn::{Attribute, Expr, ExprMethodCall, ItemMod, Lit, visit::Visit};

const METHODS: [(&str, &str); 6] = [
    ("get", "GET"),
    ("post", "POST"),
    ("put", "PUT"),
    ("patch", "PATCH"),
    ("delete", "DELETE"),
    ("any", "ANY"),
];

/// Sort key: path first, then methods in `METHODS` order.
type RouteKey = (String, usize);

struct RouteCalls<'a> {
    source: &'a str,
    found: &'a mut BTreeMap<RouteKey, String>,
}

impl<'ast> Visit<'ast> for RouteCalls<'_> {
    fn visit_item_mod(&mut self, node: &'ast ItemMod) {
        // test routers are not part of the served surface
        if !is_cfg_test(&node.attrs) {
            syn::visit::visit_item_mod(self, node);
        }
    }

    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if node.method == "route" {
            self.record(node);
        }
        syn::visit::visit_expr_method_call(self, node);
    }
}

impl RouteCalls<'_> {
    fn record(&mut self, call: &ExprMethodCall) {
        let mut args = call.args.iter();
        let Some(path) = args.next().and_then(string_literal) else {
            println!(
                "cargo:warning=sitemap: skipping non-literal route path in {}",
                self.source
            );
            return;
        };

        let mut ranks = args.next().map(method_ranks).unwrap_or_default();
        if ranks.is_empty() {
            ranks.push(METHODS.len() - 1);
        }

        for rank in ranks {
            let key = (path.clone(), rank);
            if let Some(previous) = self.found.insert(key, self.source.to_string()) {
                println!(
                    "cargo:warning=sitemap: {} {} registered in both {} and {}",
                    METHODS[rank].1, path, previous, self.source
                );
            }
        }
    }
}

fn is_cfg_test(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        attr.path().is_ident("cfg")
            && attr
                .parse_args::<syn::Ident>()
                .is_ok_and(|ident| ident == "test")
    })
}

fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Str(value) => Some(value.value()),
            _ => None,
        },
        Expr::Paren(inner) => string_literal(&inner.expr),
        Expr::Reference(inner) => string_literal(&inner.expr),
        _ => None,
    }
}

/// Walks a method-router chain such as `post(a).delete(b)` from the outside
/// in and returns the recognised HTTP methods as `METHODS` indices.
fn method_ranks(expr: &Expr) -> Vec<usize> {
    let mut ranks = Vec::new();
    let mut current = expr;
    loop {
        let (name, next) = match current {
            Expr::MethodCall(call) => (call.method.to_string(), Some(&*call.receiver)),
            Expr::Call(call) => match &*call.func {
                Expr::Path(func) => match func.path.segments.last() {
                    Some(segment) => (segment.ident.to_string(), None),
                    None => break,
                },
                _ => break,
            },
            Expr::Paren(inner) => {
                current = &inner.expr;
                continue;
            }
            _ => break,
        };

        if let Some(rank) = METHODS
            .iter()
            .position(|(helper, _)| name.eq_ignore_ascii_case(helper))
        {
            if !ranks.contains(&rank) {
                ranks.push(rank);
            }
        }

        match next {
            Some(receiver) => current = receiver,
            None => break,
        }
    }
    ranks.sort_unstable();
    ranks
}

fn route_files(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", dir.display()));
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    files.sort();
    files
}

fn render(found: &BTreeMap<RouteKey, String>) -> String {
    let mut out = String::from("pub static ROUTES: &[RouteInfo] = &[\n");
    for ((path, rank), source) in found {
        out.push_str(&format!(
            "    RouteInfo {{ method: {:?}, path: {:?}, source: {:?} }},\n",
            METHODS[*rank].1, path, source
        ));
    }
    out.push_str("];\n");
    out
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let routes_dir = manifest_dir.join("src/routes");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", routes_dir.display());

    let mut found = BTreeMap::new();
    for file in route_files(&routes_dir) {
        println!("cargo:rerun-if-changed={}", file.display());
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", file.display()));
        let parsed = syn::parse_file(&content)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", file.display()));
        let source = file
            .strip_prefix(&manifest_dir)
            .unwrap_or(&file)
            .display()
            .to_string();

        RouteCalls {
            source: &source,
            found: &mut found,
        }
        .visit_file(&parsed);
    }

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR")).join("routes_generated.rs");
    fs::write(&out_path, render(&found))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_path.display()));
}
