mod fake;

use std::io::{Cursor, SeekFrom};

use sdl2_dyn::{sdl2_sys as sys, Sdl};

#[test]
fn memory_stream_reports_its_size() {
    let sdl = fake::sdl();
    let mut mem = [0u8; 10];
    let mut rw = sdl.rw_from_mem(&mut mem).unwrap();
    assert_eq!(rw.kind(), sys::RWOPS_MEMORY);
    assert_eq!(rw.size().unwrap(), 10);
    assert_eq!(rw.seek(SeekFrom::End(-4)).unwrap(), 6);
    assert_eq!(rw.tell().unwrap(), 6);
}

#[test]
fn every_primitive_round_trips() {
    let sdl = fake::sdl();
    let mut mem = [0u8; 1 + 2 * 2 + 2 * 4 + 2 * 8];
    {
        let mut rw = sdl.rw_from_mem(&mut mem).unwrap();
        assert_eq!(rw.write_u8(0xa5), 1);
        assert_eq!(rw.write_le16(0x1234), 1);
        assert_eq!(rw.write_be16(0x5678), 1);
        assert_eq!(rw.write_le32(0x89ab_cdef), 1);
        assert_eq!(rw.write_be32(0x0102_0304), 1);
        assert_eq!(rw.write_le64(0x1122_3344_5566_7788), 1);
        assert_eq!(rw.write_be64(0x99aa_bbcc_ddee_ff00), 1);
        // Full, so nothing more fits.
        assert_eq!(rw.write_u8(0xff), 0);
    }

    assert_eq!(mem[..5], [0xa5, 0x34, 0x12, 0x56, 0x78]);
    assert_eq!(mem[5..9], [0xef, 0xcd, 0xab, 0x89]);
    assert_eq!(mem[9..13], [0x01, 0x02, 0x03, 0x04]);

    let mut rw = sdl.rw_from_const_mem(&mem).unwrap();
    assert_eq!(rw.kind(), sys::RWOPS_MEMORY_RO);
    assert_eq!(rw.read_u8(), 0xa5);
    assert_eq!(rw.read_le16(), 0x1234);
    assert_eq!(rw.read_be16(), 0x5678);
    assert_eq!(rw.read_le32(), 0x89ab_cdef);
    assert_eq!(rw.read_be32(), 0x0102_0304);
    assert_eq!(rw.read_le64(), 0x1122_3344_5566_7788);
    assert_eq!(rw.read_be64(), 0x99aa_bbcc_ddee_ff00);
    assert_eq!(rw.tell().unwrap(), mem.len() as u64);
    // Past the end reads as zero.
    assert_eq!(rw.read_le32(), 0);
}

#[test]
fn constant_memory_refuses_writes() {
    let sdl = fake::sdl();
    let mem = [1u8, 2, 3, 4];
    let mut rw = sdl.rw_from_const_mem(&mem).unwrap();
    assert_eq!(rw.write_be16(0xbeef), 0);
    assert_eq!(sdl.get_error(), "Can't write to read-only memory");
    assert_eq!(rw.read_be32(), 0x0102_0304);
}

#[test]
fn native_library_memory_stream() {
    let sdl = match Sdl::load() {
        Ok(sdl) => sdl,
        Err(err) => {
            eprintln!("skipping, SDL2 is not available: {err}");
            return;
        }
    };
    let mut mem = [0u8; 10];
    let mut rw = sdl.rw_from_mem(&mut mem).unwrap();
    assert_eq!(rw.size().unwrap(), 10);
    assert_eq!(rw.write_be64(0x0102_0304_0506_0708), 1);
    assert_eq!(rw.write_be32(0), 0);
    drop(rw);
    assert_eq!(mem[..8], [1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn rust_streams_back_native_reads_and_writes() {
    let sdl = fake::sdl();
    let mut rw = sdl.rw_from_stream(Cursor::new(Vec::new())).unwrap();
    assert_eq!(rw.kind(), sys::RWOPS_UNKNOWN);

    assert_eq!(rw.write(&[1, 0, 0, 0, 2, 0, 0, 0], 4).unwrap(), 2);
    assert_eq!(rw.write_be16(0xbeef), 1);
    assert_eq!(rw.size().unwrap(), 10);

    assert_eq!(rw.seek(SeekFrom::Start(0)).unwrap(), 0);
    assert_eq!(rw.read_le32(), 1);
    assert_eq!(rw.read_le32(), 2);

    let mut tail = [0u8; 4];
    assert_eq!(rw.read(&mut tail, 1).unwrap(), 2);
    assert_eq!(tail[..2], [0xbe, 0xef]);
    assert_eq!(rw.read(&mut tail, 1).unwrap(), 0);

    rw.close().unwrap();
}

#[test]
fn read_only_streams_refuse_writes() {
    let sdl = fake::sdl();
    let data = [7u8, 0, 0, 0];
    let mut rw = sdl.rw_from_reader(Cursor::new(&data[..])).unwrap();
    assert_eq!(rw.read_le32(), 7);
    assert_eq!(rw.write(&[1], 1).unwrap(), 0);
    assert_eq!(rw.seek(SeekFrom::End(-1)).unwrap(), 3);
}

#[test]
fn zero_sized_objects_are_rejected() {
    let sdl = fake::sdl();
    let mut rw = sdl.rw_from_stream(Cursor::new(vec![0u8; 4])).unwrap();
    let mut buf = [0u8; 4];
    assert!(matches!(
        rw.read(&mut buf, 0),
        Err(sdl2_dyn::Error::InvalidParameters)
    ));
}
