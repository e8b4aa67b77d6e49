use anyhow::Result;
use pretty_assertions::assert_eq;

use coffer::{read_class, ReaderFlags};

mod common;
use common::{ClassFileBuilder, Recorder};

fn class_events(middle: &[&str]) -> Vec<String> {
	let mut events = vec![
		"header v52 \"a/Main\" super Some(\"java/lang/Object\") interfaces []".to_owned(),
		"class deprecated false synthetic false".to_owned(),
	];
	events.extend(middle.iter().map(|&event| event.to_owned()));
	events.push("class end".to_owned());
	events
}

#[test]
fn elements_carry_typed_constants() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let count = b.utf8("count");
	let forty_two = b.integer(42);
	let label = b.utf8("label");
	let hi = b.utf8("hi");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(2_u16.to_be_bytes());
	body.extend(count.to_be_bytes());
	body.push(b'I');
	body.extend(forty_two.to_be_bytes());
	body.extend(label.to_be_bytes());
	body.push(b's');
	body.extend(hi.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"count\" Integer(42)",
		"element \"label\" String(\"hi\")",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn homogeneous_primitive_arrays_take_the_fast_path() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let xs = b.utf8("xs");
	let values: Vec<u16> = (1..=5).map(|value| b.integer(value)).collect();

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(xs.to_be_bytes());
	body.push(b'[');
	body.extend(5_u16.to_be_bytes());
	for value in values {
		body.push(b'I');
		body.extend(value.to_be_bytes());
	}
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"xs\" primitive array Integer([1, 2, 3, 4, 5])",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn string_arrays_are_delivered_element_by_element() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let names = b.utf8("names");
	let first = b.utf8("first");
	let second = b.utf8("second");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(names.to_be_bytes());
	body.push(b'[');
	body.extend(2_u16.to_be_bytes());
	body.push(b's');
	body.extend(first.to_be_bytes());
	body.push(b's');
	body.extend(second.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"names\" array",
		"value String(\"first\")",
		"value String(\"second\")",
		"finish array",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn enum_arrays_are_delivered_element_by_element() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let days = b.utf8("days");
	let type_e = b.utf8("LDay;");
	let monday = b.utf8("MONDAY");
	let friday = b.utf8("FRIDAY");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(days.to_be_bytes());
	body.push(b'[');
	body.extend(2_u16.to_be_bytes());
	body.push(b'e');
	body.extend(type_e.to_be_bytes());
	body.extend(monday.to_be_bytes());
	body.push(b'e');
	body.extend(type_e.to_be_bytes());
	body.extend(friday.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"days\" array",
		"value enum \"LDay;\" \"MONDAY\"",
		"value enum \"LDay;\" \"FRIDAY\"",
		"finish array",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn mixed_tags_after_a_primitive_first_element_are_rejected() {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let xs = b.utf8("xs");
	let one = b.integer(1);
	let hi = b.utf8("hi");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(xs.to_be_bytes());
	body.push(b'[');
	body.extend(2_u16.to_be_bytes());
	body.push(b'I');
	body.extend(one.to_be_bytes());
	body.push(b's');
	body.extend(hi.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	assert!(read_class(&bytes, ReaderFlags::empty(), Recorder::new()).is_err());
}

#[test]
fn visible_annotations_always_come_before_invisible_ones() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let type_b = b.utf8("LB;");

	// the invisible attribute comes first in the file
	let mut invisible = 1_u16.to_be_bytes().to_vec();
	invisible.extend(type_b.to_be_bytes());
	invisible.extend(0_u16.to_be_bytes());
	b.class_attr("RuntimeInvisibleAnnotations", invisible);

	let mut visible = 1_u16.to_be_bytes().to_vec();
	visible.extend(type_a.to_be_bytes());
	visible.extend(0_u16.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", visible);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"finish annotation",
		"finish class annotations",
		"class annotations visible false",
		"annotation \"LB;\"",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn a_declined_nested_annotation_is_skipped_in_place() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let inner = b.utf8("inner");
	let type_b = b.utf8("LB;");
	let depth = b.utf8("depth");
	let nine = b.integer(9);
	let after = b.utf8("after");
	let one = b.integer(1);

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(2_u16.to_be_bytes());
	// inner = @B(depth = 9)
	body.extend(inner.to_be_bytes());
	body.push(b'@');
	body.extend(type_b.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(depth.to_be_bytes());
	body.push(b'I');
	body.extend(nine.to_be_bytes());
	// after = 1
	body.extend(after.to_be_bytes());
	body.push(b'I');
	body.extend(one.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let mut recorder = Recorder::new();
	recorder.accept_nested_annotations = false;
	let recorder = read_class(&bytes, ReaderFlags::empty(), recorder)?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"inner\" annotation \"LB;\" declined",
		"element \"after\" Integer(1)",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn an_accepted_nested_annotation_is_walked() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let inner = b.utf8("inner");
	let type_b = b.utf8("LB;");
	let depth = b.utf8("depth");
	let nine = b.integer(9);

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(inner.to_be_bytes());
	body.push(b'@');
	body.extend(type_b.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(depth.to_be_bytes());
	body.push(b'I');
	body.extend(nine.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"inner\" annotation \"LB;\"",
		"element \"depth\" Integer(9)",
		"finish nested annotation",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}

#[test]
fn declining_the_whole_batch_does_not_stop_the_walk() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let value = b.utf8("value");
	let seven = b.integer(7);

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(value.to_be_bytes());
	body.push(b'I');
	body.extend(seven.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	b.field(0x0002, "x", "I", vec![]);
	let bytes = b.build();

	let mut recorder = Recorder::new();
	recorder.accept_annotations = false;
	let recorder = read_class(&bytes, ReaderFlags::empty(), recorder)?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true declined",
		"field \"x\" \"I\"",
		"field deprecated false synthetic false",
		"field end",
		"finish field",
	]));
	Ok(())
}

#[test]
fn field_annotations_reach_the_field_visitor() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(0_u16.to_be_bytes());
	let annotations = b.attr("RuntimeInvisibleAnnotations", body);
	b.field(0x0002, "x", "I", vec![annotations]);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"field \"x\" \"I\"",
		"field annotations visible false",
		"annotation \"LA;\"",
		"finish annotation",
		"finish field annotations",
		"field deprecated false synthetic false",
		"field end",
		"finish field",
	]));
	Ok(())
}

#[test]
fn annotation_defaults_use_the_unnamed_protocol() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let seven = b.integer(7);

	let mut body = vec![b'I'];
	body.extend(seven.to_be_bytes());
	let default = b.attr("AnnotationDefault", body);
	b.method(0x0401, "size", "()I", vec![default]);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"method \"size\" \"()I\"",
		"annotation default",
		"value Integer(7)",
		"finish annotation default",
		"method deprecated false synthetic false",
		"method end",
		"finish method",
	]));
	Ok(())
}

#[test]
fn class_elements_carry_their_descriptor() -> Result<()> {
	let mut b = ClassFileBuilder::new();
	let type_a = b.utf8("LA;");
	let target = b.utf8("target");
	let descriptor = b.utf8("Ljava/lang/String;");

	let mut body = 1_u16.to_be_bytes().to_vec();
	body.extend(type_a.to_be_bytes());
	body.extend(1_u16.to_be_bytes());
	body.extend(target.to_be_bytes());
	body.push(b'c');
	body.extend(descriptor.to_be_bytes());
	b.class_attr("RuntimeVisibleAnnotations", body);
	let bytes = b.build();

	let recorder = read_class(&bytes, ReaderFlags::empty(), Recorder::new())?;
	assert_eq!(recorder.events(), class_events(&[
		"class annotations visible true",
		"annotation \"LA;\"",
		"element \"target\" class \"Ljava/lang/String;\"",
		"finish annotation",
		"finish class annotations",
	]));
	Ok(())
}
