//! Declarative macros stamping out the entity / reader / builder triple of a schema type.
//!
//! The macros only generate thin typed wrappers; encoding and verification are delegated
//! to the generic functions in [`crate::fixed`], [`crate::vector`], [`crate::option`] and
//! [`crate::table`].
//!
//! Composite macros list their members as `index => name: Type / TypeReader`.

/// A fixed-size byte array (`Byte32`, `Uint64`, ...).
#[macro_export]
macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            pub const SIZE: usize = $size;

            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            pub fn raw_data(&self) -> &[u8] {
                &self.0
            }

            pub fn to_array(&self) -> [u8; $size] {
                self.as_reader().to_array()
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                static ZERO: [u8; $size] = [0; $size];
                $name(::std::borrow::Cow::Borrowed(&ZERO))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::fmt_hex(f, stringify!($name), &self.0)
            }
        }

        impl ::std::convert::From<[u8; $size]> for $name {
            fn from(value: [u8; $size]) -> Self {
                $name(::std::borrow::Cow::Owned(value.to_vec()))
            }
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::fixed::verify_fixed(stringify!($name), slice, $size)
            }

            fn as_builder(&self) -> $builder {
                $builder(self.to_array())
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            pub const SIZE: usize = $size;

            pub fn raw_data(&self) -> &'r [u8] {
                self.0
            }

            pub fn to_array(&self) -> [u8; $size] {
                let mut out = [0u8; $size];
                out.copy_from_slice(self.0);
                out
            }
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::fmt_hex(f, stringify!($name), self.0)
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::fixed::verify_fixed(stringify!($name), slice, $size)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        #[derive(Debug, Clone)]
        pub struct $builder([u8; $size]);

        impl ::std::default::Default for $builder {
            fn default() -> Self {
                $builder([0; $size])
            }
        }

        impl $builder {
            pub fn set(mut self, value: [u8; $size]) -> Self {
                self.0 = value;
                self
            }
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                $size
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                writer.write_all(&self.0)
            }
        }
    };
}

/// A struct of fixed-size members, encoded as their plain concatenation.
#[macro_export]
macro_rules! fixed_struct {
    (
        $(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident {
            $($idx:literal => $field:ident : $ftype:ident / $freader:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            const MEMBER_SIZES: &'static [usize] = &[$($ftype::SIZE),+];
            pub const SIZE: usize = $crate::fixed::struct_size(Self::MEMBER_SIZES);

            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            $(
                pub fn $field(&self) -> $ftype {
                    $crate::Reader::to_entity(&self.as_reader().$field())
                }
            )+
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                static ZERO: [u8; $name::SIZE] = [0; $name::SIZE];
                $name(::std::borrow::Cow::Borrowed(&ZERO))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.as_reader(), f)
            }
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::fixed::verify_fixed(stringify!($name), slice, $name::SIZE)
            }

            fn as_builder(&self) -> $builder {
                $builder {
                    $($field: self.$field()),+
                }
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            pub const SIZE: usize = $name::SIZE;

            $(
                pub fn $field(&self) -> $freader<'r> {
                    let start = $crate::fixed::member_offset($name::MEMBER_SIZES, $idx);
                    <$freader<'r> as $crate::Reader<'r>>::new_unchecked(
                        &self.0[start..start + $ftype::SIZE],
                    )
                }
            )+
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field()))+
                    .finish()
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::fixed::verify_fixed(stringify!($name), slice, $name::SIZE)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($field: $ftype),+
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: $ftype) -> Self {
                    self.$field = value;
                    self
                }
            )+
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                $name::SIZE
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                $(writer.write_all($crate::Entity::as_slice(&self.$field))?;)+
                Ok(())
            }
        }
    };
}

/// A vector of fixed-size items behind an item count.
#[macro_export]
macro_rules! fixvec {
    ($(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident, $item:ident / $ireader:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            pub const ITEM_SIZE: usize = $item::SIZE;

            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            pub fn len(&self) -> usize {
                self.as_reader().len()
            }

            pub fn is_empty(&self) -> bool {
                self.as_reader().is_empty()
            }

            pub fn get(&self, index: usize) -> Option<$item> {
                self.as_reader()
                    .get(index)
                    .map(|item| $crate::Reader::to_entity(&item))
            }

            pub fn iter(&self) -> impl Iterator<Item = $item> + '_ {
                self.as_reader()
                    .iter()
                    .map(|item| $crate::Reader::to_entity(&item))
            }

            /// The items' bytes without the count header.
            pub fn raw_data(&self) -> &[u8] {
                self.as_reader().raw_data()
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                static EMPTY: [u8; $crate::NUMBER_SIZE] = [0; $crate::NUMBER_SIZE];
                $name(::std::borrow::Cow::Borrowed(&EMPTY))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.as_reader(), f)
            }
        }

        impl ::std::iter::FromIterator<$item> for $name {
            fn from_iter<T: IntoIterator<Item = $item>>(iter: T) -> Self {
                $crate::Builder::build(&<$builder as ::std::default::Default>::default().extend(iter))
            }
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::vector::verify_fixvec(stringify!($name), slice, $item::SIZE)
            }

            fn as_builder(&self) -> $builder {
                $builder {
                    len: self.len(),
                    data: self.raw_data().to_vec(),
                }
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            pub const ITEM_SIZE: usize = $item::SIZE;

            fn view(&self) -> $crate::vector::FixVecView<'r> {
                $crate::vector::FixVecView::new_unchecked(self.0, $item::SIZE)
            }

            pub fn len(&self) -> usize {
                self.view().len()
            }

            pub fn is_empty(&self) -> bool {
                self.view().is_empty()
            }

            pub fn get(&self, index: usize) -> Option<$ireader<'r>> {
                self.view()
                    .get(index)
                    .map(<$ireader<'r> as $crate::Reader<'r>>::new_unchecked)
            }

            pub fn iter(&self) -> impl Iterator<Item = $ireader<'r>> + use<'r> {
                let view = self.view();
                (0..view.len()).filter_map(move |i| {
                    view.get(i)
                        .map(<$ireader<'r> as $crate::Reader<'r>>::new_unchecked)
                })
            }

            pub fn raw_data(&self) -> &'r [u8] {
                self.view().raw_data()
            }
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}[{}]", stringify!($name), self.len())?;
                $crate::fmt_hex(f, "", self.raw_data())
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], _compatible: bool) -> $crate::Result<()> {
                $crate::vector::verify_fixvec(stringify!($name), slice, $item::SIZE)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        /// Holds the concatenated item encodings.
        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            len: usize,
            data: ::std::vec::Vec<u8>,
        }

        impl $builder {
            pub fn push(mut self, item: $item) -> Self {
                self.data.extend_from_slice($crate::Entity::as_slice(&item));
                self.len += 1;
                self
            }

            pub fn extend<T: IntoIterator<Item = $item>>(mut self, iter: T) -> Self {
                for item in iter {
                    self = self.push(item);
                }
                self
            }

            pub fn set(mut self, items: ::std::vec::Vec<$item>) -> Self {
                self.len = 0;
                self.data.clear();
                self.extend(items)
            }

            pub fn len(&self) -> usize {
                self.len
            }

            pub fn is_empty(&self) -> bool {
                self.len == 0
            }
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                $crate::vector::fixvec_len(self.len, $item::SIZE)
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                $crate::vector::write_fixvec(writer, self.len, &self.data)
            }
        }
    };
}

/// A vector of variable-size items behind an offset table.
#[macro_export]
macro_rules! dynvec {
    ($(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident, $item:ident / $ireader:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            pub fn len(&self) -> usize {
                self.as_reader().len()
            }

            pub fn is_empty(&self) -> bool {
                self.as_reader().is_empty()
            }

            pub fn get(&self, index: usize) -> Option<$item> {
                self.as_reader()
                    .get(index)
                    .map(|item| $crate::Reader::to_entity(&item))
            }

            pub fn iter(&self) -> impl Iterator<Item = $item> + '_ {
                self.as_reader()
                    .iter()
                    .map(|item| $crate::Reader::to_entity(&item))
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                static EMPTY: [u8; $crate::NUMBER_SIZE] = [$crate::NUMBER_SIZE as u8, 0, 0, 0];
                $name(::std::borrow::Cow::Borrowed(&EMPTY))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.as_reader(), f)
            }
        }

        impl ::std::iter::FromIterator<$item> for $name {
            fn from_iter<T: IntoIterator<Item = $item>>(iter: T) -> Self {
                $crate::Builder::build(&<$builder as ::std::default::Default>::default().extend(iter))
            }
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                $crate::vector::verify_dynvec(
                    stringify!($name),
                    slice,
                    compatible,
                    stringify!($item),
                    <$item as $crate::Entity>::verify,
                )
            }

            fn as_builder(&self) -> $builder {
                $builder(self.iter().collect())
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            fn view(&self) -> $crate::vector::DynVecView<'r> {
                $crate::vector::DynVecView::new_unchecked(self.0)
            }

            pub fn len(&self) -> usize {
                self.view().len()
            }

            pub fn is_empty(&self) -> bool {
                self.view().is_empty()
            }

            pub fn get(&self, index: usize) -> Option<$ireader<'r>> {
                self.view()
                    .get(index)
                    .map(<$ireader<'r> as $crate::Reader<'r>>::new_unchecked)
            }

            pub fn iter(&self) -> impl Iterator<Item = $ireader<'r>> + use<'r> {
                let view = self.view();
                (0..view.len()).filter_map(move |i| {
                    view.get(i)
                        .map(<$ireader<'r> as $crate::Reader<'r>>::new_unchecked)
                })
            }
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))?;
                f.debug_list().entries(self.iter()).finish()
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                <$name as $crate::Entity>::verify(slice, compatible)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder(::std::vec::Vec<$item>);

        impl $builder {
            pub fn push(mut self, item: $item) -> Self {
                self.0.push(item);
                self
            }

            pub fn extend<T: IntoIterator<Item = $item>>(mut self, iter: T) -> Self {
                self.0.extend(iter);
                self
            }

            pub fn set(mut self, items: ::std::vec::Vec<$item>) -> Self {
                self.0 = items;
                self
            }

            /// Replaces the item at `index`, returning `None` if it is out of range.
            pub fn replace(&mut self, index: usize, item: $item) -> Option<$item> {
                self.0
                    .get_mut(index)
                    .map(|slot| ::std::mem::replace(slot, item))
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                let lens = self
                    .0
                    .iter()
                    .map(|item| $crate::Entity::as_slice(item).len())
                    .collect::<::std::vec::Vec<_>>();
                $crate::vector::dynvec_len(&lens)
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                let items = self
                    .0
                    .iter()
                    .map($crate::Entity::as_slice)
                    .collect::<::std::vec::Vec<_>>();
                $crate::vector::write_dynvec(writer, &items)
            }
        }
    };
}

/// An optional value: empty for `None`, the inner encoding for `Some`.
#[macro_export]
macro_rules! option {
    ($(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident, $inner:ident / $ireader:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            pub fn is_none(&self) -> bool {
                self.0.is_empty()
            }

            pub fn is_some(&self) -> bool {
                !self.is_none()
            }

            pub fn to_opt(&self) -> Option<$inner> {
                self.as_reader()
                    .to_opt()
                    .map(|inner| $crate::Reader::to_entity(&inner))
            }
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                $name(::std::borrow::Cow::Borrowed(&[]))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.as_reader(), f)
            }
        }

        impl ::std::convert::From<Option<$inner>> for $name {
            fn from(value: Option<$inner>) -> Self {
                match value {
                    Some(inner) => $name(::std::borrow::Cow::Owned(
                        $crate::Entity::into_vec(inner),
                    )),
                    None => ::std::default::Default::default(),
                }
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Some(value).into()
            }
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                $crate::option::verify_option(slice, compatible, <$inner as $crate::Entity>::verify)
            }

            fn as_builder(&self) -> $builder {
                $builder(self.to_opt())
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            pub fn is_none(&self) -> bool {
                self.0.is_empty()
            }

            pub fn is_some(&self) -> bool {
                !self.is_none()
            }

            pub fn to_opt(&self) -> Option<$ireader<'r>> {
                if self.is_none() {
                    None
                } else {
                    Some(<$ireader<'r> as $crate::Reader<'r>>::new_unchecked(self.0))
                }
            }
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self.to_opt() {
                    Some(inner) => write!(f, "Some({inner:?})"),
                    None => f.write_str("None"),
                }
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                <$name as $crate::Entity>::verify(slice, compatible)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder(Option<$inner>);

        impl $builder {
            pub fn set(mut self, value: Option<$inner>) -> Self {
                self.0 = value;
                self
            }
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                self.0
                    .as_ref()
                    .map_or(0, |inner| $crate::Entity::as_slice(inner).len())
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                match &self.0 {
                    Some(inner) => writer.write_all($crate::Entity::as_slice(inner)),
                    None => Ok(()),
                }
            }
        }
    };
}

/// A table: an offset-indexed list of fields of arbitrary schema types, open to
/// trailing fields added by newer schema versions.
#[macro_export]
macro_rules! table {
    (
        $(#[$meta:meta])* $name:ident, $reader:ident, $builder:ident {
            $($idx:literal => $field:ident : $ftype:ident / $freader:ident),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(::std::borrow::Cow<'static, [u8]>);

        impl $name {
            pub const FIELD_COUNT: usize =
                <$name as $crate::Table>::LAYOUT.field_count();

            pub fn as_reader(&self) -> $reader<'_> {
                $reader(&self.0)
            }

            pub fn total_size(&self) -> usize {
                self.as_reader().total_size()
            }

            pub fn field_count(&self) -> usize {
                self.as_reader().field_count()
            }

            pub fn has_extra_fields(&self) -> bool {
                self.as_reader().has_extra_fields()
            }

            pub fn count_extra_fields(&self) -> usize {
                self.as_reader().count_extra_fields()
            }

            $(
                pub fn $field(&self) -> $ftype {
                    $crate::Reader::to_entity(&self.as_reader().$field())
                }
            )*
        }

        impl ::std::default::Default for $name {
            fn default() -> Self {
                static DEFAULT: ::std::sync::OnceLock<::std::vec::Vec<u8>> =
                    ::std::sync::OnceLock::new();
                let data = DEFAULT.get_or_init(|| {
                    let builder = <$builder as ::std::default::Default>::default();
                    $crate::Entity::into_vec($crate::Builder::build(&builder))
                });
                $name(::std::borrow::Cow::Borrowed(data.as_slice()))
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.as_reader(), f)
            }
        }

        impl $crate::Table for $name {
            const LAYOUT: &'static $crate::table::TableLayout = &$crate::table::TableLayout {
                name: stringify!($name),
                fields: &[
                    $(
                        $crate::table::FieldDescriptor {
                            name: stringify!($field),
                            type_name: stringify!($ftype),
                            verify: <$ftype as $crate::Entity>::verify,
                        }
                    ),*
                ],
            };
        }

        impl $crate::Entity for $name {
            type Builder = $builder;
            const NAME: &'static str = stringify!($name);

            fn new_unchecked(data: ::std::vec::Vec<u8>) -> Self {
                $name(::std::borrow::Cow::Owned(data))
            }

            fn as_slice(&self) -> &[u8] {
                &self.0
            }

            fn into_vec(self) -> ::std::vec::Vec<u8> {
                self.0.into_owned()
            }

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                $crate::table::verify_table(slice, <$name as $crate::Table>::LAYOUT, compatible)
            }

            /// Extra fields are not carried over into the builder.
            fn as_builder(&self) -> $builder {
                #[allow(unused_variables)]
                let reader = self.as_reader();
                $builder {
                    $($field: $crate::Reader::to_entity(&reader.$field())),*
                }
            }
        }

        #[derive(Clone, Copy)]
        pub struct $reader<'r>(&'r [u8]);

        impl<'r> $reader<'r> {
            pub const FIELD_COUNT: usize = $name::FIELD_COUNT;

            /// Untyped view over the table header and fields.
            pub fn view(&self) -> $crate::table::TableView<'r> {
                $crate::table::TableView::new_unchecked(self.0, Self::FIELD_COUNT)
            }

            pub fn total_size(&self) -> usize {
                self.view().total_size()
            }

            pub fn field_count(&self) -> usize {
                self.view().field_count()
            }

            pub fn is_empty(&self) -> bool {
                self.view().is_empty()
            }

            pub fn has_extra_fields(&self) -> bool {
                self.view().has_extra_fields()
            }

            pub fn count_extra_fields(&self) -> usize {
                self.view().count_extra_fields()
            }

            $(
                pub fn $field(&self) -> $freader<'r> {
                    <$freader<'r> as $crate::Reader<'r>>::new_unchecked(self.view().field($idx))
                }
            )*
        }

        impl ::std::fmt::Debug for $reader<'_> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut s = f.debug_struct(stringify!($name));
                $(s.field(stringify!($field), &self.$field());)*
                if self.has_extra_fields() {
                    s.field("extra_fields", &self.count_extra_fields());
                }
                s.finish()
            }
        }

        impl<'r> $crate::Reader<'r> for $reader<'r> {
            type Entity = $name;
            const NAME: &'static str = stringify!($name);

            fn verify(slice: &[u8], compatible: bool) -> $crate::Result<()> {
                <$name as $crate::Entity>::verify(slice, compatible)
            }

            fn new_unchecked(slice: &'r [u8]) -> Self {
                $reader(slice)
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $($field: $ftype),*
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: $ftype) -> Self {
                    self.$field = value;
                    self
                }
            )*
        }

        impl $crate::Builder for $builder {
            type Entity = $name;
            const NAME: &'static str = stringify!($builder);

            fn expected_length(&self) -> usize {
                $crate::table::table_len(&[$($crate::Entity::as_slice(&self.$field).len()),*])
            }

            fn write<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                $crate::table::write_table(writer, &[$($crate::Entity::as_slice(&self.$field)),*])
            }
        }
    };
}
