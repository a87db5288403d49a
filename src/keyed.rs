//! Shaping helpers for string-keyed maps.
//!
//! `Keyed<V>` preserves insertion order, so positional contracts like
//! [`zip_obj`] and [`map_to_obj`] survive round trips. Reflective iteration
//! over arbitrary record shapes is deliberately out of scope; everything
//! here goes through this one string-key abstraction.

use std::rc::Rc;

use indexmap::IndexMap;

/// Insertion-order-preserving map from string keys to values.
pub type Keyed<V> = IndexMap<String, V>;

/// A function still waiting for its receiver: the unbound form stored in
/// the maps handed to [`bind_all_to`].
pub type ContextFn<C, A, R> = fn(&C, A) -> R;

/// A closure with its receiver bound in.
pub type BoundFn<A, R> = Box<dyn Fn(A) -> R>;

/// Pair `keys` with `values` positionally; stops at the shorter input.
pub fn zip_obj<V>(keys: &[&str], values: Vec<V>) -> Keyed<V> {
    keys.iter().map(|k| (*k).to_string()).zip(values).collect()
}

/// The subset of `map` at the named keys; absent keys are skipped.
pub fn pick<V: Clone>(keys: &[&str], map: &Keyed<V>) -> Keyed<V> {
    keys.iter()
        .filter_map(|k| map.get(*k).map(|v| ((*k).to_string(), v.clone())))
        .collect()
}

/// Apply `f` to every value; keys and their order are unchanged.
pub fn map_values<V, W>(mut f: impl FnMut(&V) -> W, map: &Keyed<V>) -> Keyed<W> {
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Copy of `base` with `overlay` written over it.
///
/// Keys already in `base` keep their position; keys new in `overlay` are
/// appended in overlay order.
pub fn merge<V: Clone>(base: &Keyed<V>, overlay: &Keyed<V>) -> Keyed<V> {
    let mut merged = base.clone();
    for (k, v) in overlay {
        merged.insert(k.clone(), v.clone());
    }
    merged
}

/// Compute `f(key)` for each key; returns key → computed value in key
/// order.
pub fn map_to_obj<V>(mut f: impl FnMut(&str) -> V, keys: &[&str]) -> Keyed<V> {
    let values = keys.iter().map(|k| f(k)).collect();
    zip_obj(keys, values)
}

/// Transform the values at the named keys; leave every other entry alone.
pub fn map_picked_values<V: Clone>(
    target: &Keyed<V>,
    keys: &[&str],
    f: impl FnMut(&V) -> V,
) -> Keyed<V> {
    merge(target, &map_values(f, &pick(keys, target)))
}

/// Bind every function in `funcs` to a shared `context` receiver.
///
/// The returned map holds closures that no longer take the context; all of
/// them share the same receiver. Single-threaded by contract, hence `Rc`.
pub fn bind_all_to<C, A, R>(
    funcs: Keyed<ContextFn<C, A, R>>,
    context: Rc<C>,
) -> Keyed<BoundFn<A, R>>
where
    C: 'static,
    A: 'static,
    R: 'static,
{
    funcs
        .into_iter()
        .map(|(name, f)| {
            let context = Rc::clone(&context);
            (name, Box::new(move |arg: A| f(&context, arg)) as BoundFn<A, R>)
        })
        .collect()
}
