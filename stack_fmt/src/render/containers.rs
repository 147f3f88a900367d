// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [Render] for std containers and tuples, laid out as `{ a, b, c }`. Maps render each
//! entry as a nested pair: `{ { 1, one }, { 2, two } }`. Empty containers render
//! as `{ }`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::{FormatOut, FormatResult, Render};

fn render_braced<I>(items: I, out: &mut dyn FormatOut) -> FormatResult
where
    I: IntoIterator,
    I::Item: Render,
{
    out.write_byte(b'{');
    let mut is_first = true;
    for item in items {
        out.write_text(if is_first { " " } else { ", " });
        is_first = false;
        item.render(out)?;
    }
    out.write_text(" }");
    Ok(())
}

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

impl<T: Render> Render for VecDeque<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

/// Iteration order is the set's own, so it is only stable for a given hasher state.
impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult { render_braced(self, out) }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        render_braced(self.iter(), out)
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        render_braced(self.iter(), out)
    }
}

impl Render for () {
    fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
        render_braced(std::iter::empty::<&str>(), out)
    }
}

macro_rules! impl_render_tuple {
    ($($name:ident),+) => {
        impl<$($name: Render),+> Render for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render(&self, out: &mut dyn FormatOut) -> FormatResult {
                let ($($name,)+) = self;
                let items: &[&dyn Render] = &[$($name),+];
                render_braced(items.iter().copied(), out)
            }
        }
    };
}

impl_render_tuple!(A);
impl_render_tuple!(A, B);
impl_render_tuple!(A, B, C);
impl_render_tuple!(A, B, C, D);
impl_render_tuple!(A, B, C, D, E);
impl_render_tuple!(A, B, C, D, E, F);
