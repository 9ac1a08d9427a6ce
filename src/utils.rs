/// Name of `T` without module path and generic arguments, e.g. `Visitor1` for
/// `double_dispatch::visitors::Visitor1<std::io::Stdout>`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
